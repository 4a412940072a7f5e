//! `innkeep-booking` — the booking aggregate and its valuation pipeline.
//!
//! The surrounding CRUD layer fetches a booking with its rooms, commissions
//! and payments, calls [`valuation::valuate`] inside its database
//! transaction, and persists whatever the pipeline left on the aggregate.
//! The pipeline itself never fails and performs no I/O beyond currency-rate
//! point reads through [`innkeep_currency::RateSource`].

pub mod booking;
pub mod valuation;

pub use booking::{Booking, Commission, CommissionSource, Payment, RoomLineItem};
pub use valuation::{
    BookingTotals, DEFAULT_COMMISSION_PERCENT, ValuationRequest, refresh_commissions,
    rooms_total, stay_nights, totals, valuate,
};
