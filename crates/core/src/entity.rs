//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A `Booking` is the same booking across price recomputations because its
/// `BookingId` is the same; its attribute values change, its identity does
/// not.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
