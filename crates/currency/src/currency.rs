use std::collections::HashMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use innkeep_core::{CurrencyId, Entity};

/// Code of the base currency all totals are normalized to.
pub const BASE_CURRENCY_CODE: &str = "EUR";

/// A currency row from the back-office catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyId,
    /// ISO-style code, e.g. "USD".
    pub code: String,
    /// Display symbol, e.g. "$".
    pub symbol: Option<String>,
    /// Fixed conversion multiplier into the base currency. `None` means the
    /// rate is unknown; readers fall back to 1.
    pub rate_to_base: Option<Decimal>,
}

impl Entity for Currency {
    type Id = CurrencyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-side collaborator for currency conversion rates.
///
/// The valuation core holds no currency state; it performs one point read
/// per distinct currency id it encounters. The persistence layer implements
/// this against the currencies table; tests use [`RateTable`].
pub trait RateSource {
    /// The stored rate-to-base for a currency, if the currency is known and
    /// has a rate on record.
    fn rate_to_base(&self, currency_id: CurrencyId) -> Option<Decimal>;

    /// Rate-to-base with the defaulting rule applied: an absent currency id,
    /// an unknown currency, or a currency without a stored rate all resolve
    /// to 1 (amounts are then treated as already being in base currency).
    fn resolve(&self, currency_id: Option<CurrencyId>) -> Decimal {
        currency_id
            .and_then(|id| self.rate_to_base(id))
            .unwrap_or(Decimal::ONE)
    }
}

/// In-memory `RateSource` over a set of `Currency` rows.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    currencies: HashMap<CurrencyId, Currency>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, currency: Currency) {
        self.currencies.insert(currency.id, currency);
    }

    pub fn get(&self, currency_id: CurrencyId) -> Option<&Currency> {
        self.currencies.get(&currency_id)
    }
}

impl FromIterator<Currency> for RateTable {
    fn from_iter<I: IntoIterator<Item = Currency>>(iter: I) -> Self {
        let mut table = Self::new();
        for currency in iter {
            table.insert(currency);
        }
        table
    }
}

impl RateSource for RateTable {
    fn rate_to_base(&self, currency_id: CurrencyId) -> Option<Decimal> {
        self.currencies
            .get(&currency_id)
            .and_then(|c| c.rate_to_base)
    }
}

/// Round a monetary value to 2 decimal places, half-up.
///
/// Applied only where a value is surfaced to the caller; intermediate
/// accumulation stays unrounded so rounding error does not compound across
/// many room line-items or payments.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
