//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_DIRECTION_DISTANCE;

/// 2D position in screen space (world units).
/// x grows to the right, y grows upward; the ground line is near y = 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Heading as a unit vector. The zero vector is only produced when a
/// direction is requested between two identical points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed since the session started.
    pub tick: u64,
    /// Elapsed play time in seconds (real time, unaffected by slow-motion).
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn range_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Unit direction toward `other`.
    ///
    /// Coincident points fall back to a floored distance so the result is
    /// finite (the zero vector) instead of NaN.
    pub fn direction_to(&self, other: &Position) -> Direction {
        let delta = other.as_vec() - self.as_vec();
        let length = delta.length();
        let length = if length > 0.0 {
            length
        } else {
            MIN_DIRECTION_DISTANCE
        };
        Direction::from(delta / length)
    }

    /// Move `distance` units along `direction`.
    pub fn advanced(&self, direction: Direction, distance: f64) -> Position {
        Position::from(self.as_vec() + direction.as_vec() * distance)
    }

    /// Shift by a fixed offset.
    pub fn offset(&self, dx: f64, dy: f64) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Direction {
    pub const RIGHT: Direction = Direction { x: 1.0, y: 0.0 };
    pub const DOWN: Direction = Direction { x: 0.0, y: -1.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Direction {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
