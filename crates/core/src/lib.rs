//! `innkeep-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): the boundary error model, strongly-typed relational
//! identifiers, and the entity/value-object marker traits.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{
    BookingId, BrokerId, CurrencyId, CustomerId, HotelId, MealPlanId, PaymentId, RoomTypeId,
    SellerId, SupplierId, ViewTypeId,
};
pub use value_object::ValueObject;
