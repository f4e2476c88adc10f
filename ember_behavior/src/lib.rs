//! # Ember Behavior
//!
//! Turns declarative rules (trigger + conditions + actions) into state changes
//! on an [`ember_core::World`].
//!
//! ## Core Components
//!
//! - **events**: the transient messages rules react to
//! - **behavior**: triggers, rules, the execution context and the dispatcher
//! - **conditions** / **actions**: the built-in rule building blocks
//! - **loader**: JSON scene and rule definitions
//!
//! ## Step Model
//!
//! Events emitted during [`Dispatcher::update`] are queued for the next
//! update, never processed in the same pass. Destroyed entities are purged by
//! [`Simulation::cleanup`] once every rule of the step has run.

pub mod actions;
pub mod behavior;
pub mod conditions;
pub mod error;
pub mod events;
pub mod loader;

pub use actions::*;
pub use behavior::*;
pub use conditions::*;
pub use error::*;
pub use events::*;
pub use loader::*;
