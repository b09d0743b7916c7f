//! Domain layer - aggregates, value objects, and the publication gate.

pub mod account;
pub mod card;
pub mod certification;
pub mod foundation;
pub mod purchase;
pub mod review;
