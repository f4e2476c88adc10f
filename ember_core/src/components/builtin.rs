//! Component types shipped with the engine.

use serde::{Deserialize, Serialize};

/// Location in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Position at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-step displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    /// Velocity of `(x, y)` units per step.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How an entity is drawn: a solid rectangle of the given size and color.
///
/// Scenes carry it under the `display` key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub width: f64,
    pub height: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            width: 20.0,
            height: 20.0,
            r: 255,
            g: 255,
            b: 255,
        }
    }
}
