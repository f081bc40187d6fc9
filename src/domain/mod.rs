//! Domain layer - entities, value objects, and pure derivations.

pub mod budget;
pub mod chat;
pub mod foundation;
pub mod guests;
pub mod planner;
pub mod showcase;
