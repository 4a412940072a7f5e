//! Strongly-typed identifiers used across the domain.
//!
//! The backing store is a relational database with `i32` surrogate keys, so
//! every identifier is a transparent newtype over `i32`. Room-type, view-type
//! and meal-plan ids are opaque to the valuation core: they are carried on
//! room line-items but never interpreted.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! impl_id_newtype {
    ($(#[$doc:meta])* $t:ident, $name:literal) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(i32);

        impl $t {
            pub fn new(raw: i32) -> Self {
                Self(raw)
            }

            pub fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = i32::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_id_newtype!(
    /// Identifier of a booking.
    BookingId, "BookingId");
impl_id_newtype!(
    /// Identifier of a customer.
    CustomerId, "CustomerId");
impl_id_newtype!(
    /// Identifier of a hotel.
    HotelId, "HotelId");
impl_id_newtype!(
    /// Identifier of a seller (back-office staff member).
    SellerId, "SellerId");
impl_id_newtype!(
    /// Identifier of a supplier.
    SupplierId, "SupplierId");
impl_id_newtype!(
    /// Identifier of a broker.
    BrokerId, "BrokerId");
impl_id_newtype!(
    /// Identifier of a currency.
    CurrencyId, "CurrencyId");
impl_id_newtype!(
    /// Identifier of a room-type catalog entry (opaque to the core).
    RoomTypeId, "RoomTypeId");
impl_id_newtype!(
    /// Identifier of a view-type catalog entry (opaque to the core).
    ViewTypeId, "ViewTypeId");
impl_id_newtype!(
    /// Identifier of a meal-plan catalog entry (opaque to the core).
    MealPlanId, "MealPlanId");
impl_id_newtype!(
    /// Identifier of a payment.
    PaymentId, "PaymentId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_string() {
        let id: CurrencyId = "7".parse().unwrap();
        assert_eq!(id, CurrencyId::new(7));
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "abc".parse::<BookingId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(_)));
    }

    #[test]
    fn display_round_trips() {
        let id = BookingId::new(42);
        assert_eq!(id.to_string().parse::<BookingId>().unwrap(), id);
    }
}
