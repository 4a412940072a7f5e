//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; they
/// have no identity of their own. In this workspace the room line-items of a
/// booking are value objects: they are replaced wholesale on every valuation
/// and never patched in place, so two line-items with the same room type,
/// count, nightly price and currency are interchangeable. The computed
/// booking totals are another example.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct BookingTotals {
///     total_price_base: Decimal,
///     total_paid_base: Decimal,
///     remaining_base: Decimal,
/// }
///
/// impl ValueObject for BookingTotals {}
/// ```
///
/// Requirements: `Clone` (values are copied, not referenced), `PartialEq`
/// (compared by value), `Debug` (loggable in tests).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
