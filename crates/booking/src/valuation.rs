//! The booking valuation pipeline.
//!
//! A linear recompute run on every booking create/update: stay length →
//! room totals → commission regeneration → paid/remaining aggregation. The
//! pipeline raises no errors; every degenerate input (missing dates, zero
//! room counts, unknown currencies, absent overrides) takes a documented
//! default instead.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use innkeep_core::ValueObject;
use innkeep_currency::{BASE_CURRENCY_CODE, RateSource, round_money};

use crate::booking::{Booking, Commission, CommissionSource, RoomLineItem};

/// Commission percentage applied when a request carries no override.
pub const DEFAULT_COMMISSION_PERCENT: Decimal = dec!(10);

const ONE_HUNDRED: Decimal = dec!(100);

/// Number of nights between check-in and check-out.
///
/// A missing date or a check-out that is not after check-in yields 1 night.
/// The permissive fallback is deliberate: the back office records bookings
/// with incomplete or corrected dates all the time, and a valuation run must
/// still produce a price rather than reject the row.
pub fn stay_nights(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> u32 {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return 1;
    };
    let nights = check_out.signed_duration_since(check_in).num_days();
    if nights > 0 { nights as u32 } else { 1 }
}

/// Base-currency total over the room line-items for a stay of `nights`.
///
/// Per line: `nightly_price * effective_count * nights * rate_to_base`.
/// The sum is returned unrounded; [`round_money`] is applied where the
/// total is surfaced, so rounding error never compounds across rooms.
pub fn rooms_total(rooms: &[RoomLineItem], nights: u32, rates: &impl RateSource) -> Decimal {
    let nights = Decimal::from(nights);
    rooms
        .iter()
        .map(|room| {
            room.nightly_price()
                * Decimal::from(room.effective_count())
                * nights
                * rates.resolve(room.currency_id)
        })
        .sum()
}

/// Drop the auto-generated Supplier/Broker commissions and generate fresh
/// ones from the booking's current total price.
///
/// Manually entered commissions (Hotel, Agent, Internal) are left untouched,
/// so the booking ends up with at most one Supplier and one Broker
/// commission no matter how many times this runs: regeneration is
/// idempotent. A percent override for an entity that is not linked is
/// ignored — no supplier, no supplier commission.
pub fn refresh_commissions(
    booking: &mut Booking,
    supplier_override: Option<Decimal>,
    broker_override: Option<Decimal>,
) {
    booking
        .commissions
        .retain(|commission| !commission.source.is_auto_generated());

    let currency_id = booking.first_room_currency();
    let base_total = booking.total_price;

    if booking.supplier_id.is_some() {
        let percent = supplier_override.unwrap_or(DEFAULT_COMMISSION_PERCENT);
        booking.commissions.push(Commission {
            source: CommissionSource::Supplier,
            percent,
            amount: commission_amount(base_total, percent),
            currency_id,
        });
    }

    if booking.broker_id.is_some() {
        let percent = broker_override.unwrap_or(DEFAULT_COMMISSION_PERCENT);
        booking.commissions.push(Commission {
            source: CommissionSource::Broker,
            percent,
            amount: commission_amount(base_total, percent),
            currency_id,
        });
    }
}

fn commission_amount(total: Decimal, percent: Decimal) -> Decimal {
    // Commission rows are surfaced as stored, so the 2 dp rule applies here.
    round_money(total * percent / ONE_HUNDRED)
}

/// Monetary summary attached to every booking response.
///
/// One explicit value type embedded by both the summary and the detail
/// response shapes; both read the same three figures and the base currency
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingTotals {
    /// Stored booking total; already base currency by construction.
    pub total_price_base: Decimal,
    /// Sum of payments converted to base currency.
    pub total_paid_base: Decimal,
    /// `total_price_base - total_paid_base`; negative means overpayment,
    /// which is a signed balance, not an error.
    pub remaining_base: Decimal,
    /// Always [`BASE_CURRENCY_CODE`]; carried for display.
    pub base_currency_code: String,
}

impl ValueObject for BookingTotals {}

/// Paid/remaining aggregation over the booking's payments.
///
/// Each payment converts at its recorded `rate_used` when present,
/// otherwise at the live rate of its currency. Both surfaced sums are
/// rounded to 2 dp and the remainder is taken over the rounded values, so
/// `remaining_base == total_price_base - total_paid_base` holds exactly.
pub fn totals(booking: &Booking, rates: &impl RateSource) -> BookingTotals {
    let total_price_base = round_money(booking.total_price);
    let total_paid_base = round_money(
        booking
            .payments
            .iter()
            .map(|payment| payment.paid_in_base(rates))
            .sum::<Decimal>(),
    );

    BookingTotals {
        total_price_base,
        total_paid_base,
        remaining_base: total_price_base - total_paid_base,
        base_currency_code: BASE_CURRENCY_CODE.to_string(),
    }
}

/// What a booking create/update request contributes to a valuation run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// `None` means the payload did not mention rooms and the booking's
    /// current collection stands; `Some` replaces the collection wholesale,
    /// `Some(vec![])` clears it.
    pub rooms: Option<Vec<RoomLineItem>>,
    pub supplier_commission_percent: Option<Decimal>,
    pub broker_commission_percent: Option<Decimal>,
}

/// Run the full valuation pipeline against a booking.
///
/// Steps, in order:
/// 1. take the request's dates onto the booking;
/// 2. replace the room collection if the request supplies one;
/// 3. with rooms present, recompute `total_price` from rooms × stay length
///    (rounded at this surface); with none, keep the stored total — the
///    manual-override path for bookings whose rooms are not tracked;
/// 4. regenerate Supplier/Broker commissions at the request's overrides;
/// 5. return the paid/remaining totals so the caller can respond without a
///    second read.
///
/// The caller is expected to wrap fetch → `valuate` → persist in a single
/// database transaction; the pipeline itself performs no I/O beyond rate
/// point reads.
pub fn valuate(
    booking: &mut Booking,
    request: ValuationRequest,
    rates: &impl RateSource,
) -> BookingTotals {
    booking.check_in = request.check_in;
    booking.check_out = request.check_out;

    if let Some(rooms) = request.rooms {
        booking.rooms = rooms;
    }

    if !booking.rooms.is_empty() {
        let nights = stay_nights(booking.check_in, booking.check_out);
        booking.total_price = round_money(rooms_total(&booking.rooms, nights, rates));
    }

    refresh_commissions(
        booking,
        request.supplier_commission_percent,
        request.broker_commission_percent,
    );

    totals(booking, rates)
}
