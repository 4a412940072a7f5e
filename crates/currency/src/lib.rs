//! `innkeep-currency` — currencies, conversion rates and money rounding.
//!
//! All monetary totals in the back office are normalized to a single base
//! currency (EUR). This crate owns the `Currency` entity, the `RateSource`
//! collaborator trait the valuation core reads rates through, and the
//! rounding rule applied wherever a monetary value is surfaced.

pub mod currency;

pub use currency::{BASE_CURRENCY_CODE, Currency, RateSource, RateTable, round_money};
