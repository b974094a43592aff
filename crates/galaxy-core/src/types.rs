//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::TICK_RATE;

/// 2D position in arena space (pixels). x grows right, y grows down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in arena space (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Playable area. Origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

/// Simulation time tracking.
///
/// Time is derived from the tick counter so that the millisecond clock is
/// exact and free of accumulated float drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each unpaused tick).
    pub tick: u64,
    /// Elapsed simulation time in whole milliseconds.
    pub elapsed_ms: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Velocity of magnitude `speed` pointing from `from` to `to`.
    /// Zero when the two points coincide.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Self {
        let dir = (to.as_dvec2() - from.as_dvec2()).normalize_or_zero();
        let v = dir * speed;
        Self::new(v.x, v.y)
    }

    /// Velocity of magnitude `speed` along `angle` (radians, 0 = +x).
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self::new(angle.cos() * speed, angle.sin() * speed)
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        DVec2::new(self.x, self.y).length()
    }
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Clamp `value` so a body of extent `size` stays inside `[0, extent]`.
    pub fn clamp_axis(value: f64, size: f64, extent: f64) -> f64 {
        let lo = size / 2.0;
        let hi = (extent - size / 2.0).max(lo);
        value.clamp(lo, hi)
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_ms = self.tick * 1000 / TICK_RATE as u64;
    }
}
