//! # Ember Core
//!
//! The data substrate of the ember2D engine: entity identity and liveness,
//! tag classification, and per-type component storage.
//! This crate knows nothing about events or rules; those live in `ember_behavior`.

pub mod components;
pub mod entities;
pub mod systems;
pub mod world;

pub use components::*;
pub use entities::*;
pub use systems::*;
pub use world::*;
