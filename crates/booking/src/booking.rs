use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use innkeep_core::{
    BookingId, BrokerId, CurrencyId, CustomerId, Entity, HotelId, MealPlanId, PaymentId,
    RoomTypeId, SellerId, SupplierId, ValueObject, ViewTypeId,
};
use innkeep_currency::RateSource;

/// One room row within a booking: type/view/meal-plan references, how many
/// rooms of that kind, and the nightly price in the row's own currency.
///
/// Line-items are owned by exactly one booking and are replaced wholesale on
/// every create/update; they are never patched individually.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomLineItem {
    pub room_type_id: Option<RoomTypeId>,
    pub view_type_id: Option<ViewTypeId>,
    pub meal_plan_id: Option<MealPlanId>,
    pub room_count: Option<i32>,
    pub price_per_night: Option<Decimal>,
    pub currency_id: Option<CurrencyId>,
}

impl RoomLineItem {
    /// Room count with the defaulting rule applied: absent, zero or negative
    /// counts all mean one room.
    pub fn effective_count(&self) -> i64 {
        match self.room_count {
            Some(count) if count > 0 => i64::from(count),
            _ => 1,
        }
    }

    /// Nightly price, defaulting to zero when not entered.
    pub fn nightly_price(&self) -> Decimal {
        self.price_per_night.unwrap_or(Decimal::ZERO)
    }
}

impl ValueObject for RoomLineItem {}

/// Where a commission comes from.
///
/// `Supplier` and `Broker` commissions are produced by the valuation
/// pipeline and replaced on every recomputation; the other three are entered
/// by staff and must survive recomputation untouched. The serialized form is
/// the literal tag (`"Supplier"`, `"Broker"`, …) the dashboard displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommissionSource {
    Supplier,
    Broker,
    Hotel,
    Agent,
    Internal,
}

impl CommissionSource {
    /// True for the two sources the pipeline generates itself.
    pub fn is_auto_generated(self) -> bool {
        matches!(self, Self::Supplier | Self::Broker)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supplier => "Supplier",
            Self::Broker => "Broker",
            Self::Hotel => "Hotel",
            Self::Agent => "Agent",
            Self::Internal => "Internal",
        }
    }
}

impl core::fmt::Display for CommissionSource {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A commission owed on a booking, in base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub source: CommissionSource,
    /// Percentage of the booking total, 0–100.
    pub percent: Decimal,
    /// `total_price * percent / 100`, in base currency.
    pub amount: Decimal,
    /// Inherited from the booking's first room line-item, absent without
    /// rooms.
    pub currency_id: Option<CurrencyId>,
}

impl ValueObject for Commission {}

/// A recorded payment against a booking, in its own currency.
///
/// Read-only to the valuation pipeline; payments are only summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Decimal,
    pub currency_id: Option<CurrencyId>,
    /// Conversion rate captured when the payment was recorded. When present
    /// it overrides the live currency rate, so the payment stays
    /// historically accurate if the rate changes later.
    pub rate_used: Option<Decimal>,
}

impl Payment {
    /// The payment expressed in base currency.
    pub fn paid_in_base(&self, rates: &impl RateSource) -> Decimal {
        let rate = self
            .rate_used
            .unwrap_or_else(|| rates.resolve(self.currency_id));
        self.amount * rate
    }
}

impl Entity for Payment {
    type Id = PaymentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A booking row with the owned collections the valuation pipeline works on.
///
/// `total_price` is always in base currency. Once rooms are present it is a
/// deterministic function of the rooms and the stay length; with no rooms
/// the previously stored value is preserved, which doubles as the manual
/// price-override path for bookings whose rooms are not tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub customer_id: Option<CustomerId>,
    pub hotel_id: Option<HotelId>,
    pub seller_id: Option<SellerId>,
    pub supplier_id: Option<SupplierId>,
    pub broker_id: Option<BrokerId>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub total_price: Decimal,
    pub rooms: Vec<RoomLineItem>,
    pub commissions: Vec<Commission>,
    pub payments: Vec<Payment>,
}

impl Booking {
    /// A booking with no linkage, no rooms and a zero total.
    pub fn new(id: BookingId) -> Self {
        Self {
            id,
            customer_id: None,
            hotel_id: None,
            seller_id: None,
            supplier_id: None,
            broker_id: None,
            check_in: None,
            check_out: None,
            total_price: Decimal::ZERO,
            rooms: Vec::new(),
            commissions: Vec::new(),
            payments: Vec::new(),
        }
    }

    /// Currency of the first room line-item (insertion order). Generated
    /// commissions inherit this.
    pub fn first_room_currency(&self) -> Option<CurrencyId> {
        self.rooms.first().and_then(|room| room.currency_id)
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
