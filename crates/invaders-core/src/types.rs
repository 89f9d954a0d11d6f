//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HIGH_SCORE_NAME, PLAY_AREA_HEIGHT, PLAY_AREA_WIDTH, TICK_RATE};

/// 2D position in screen space (pixels). Origin is the top-left corner of the
/// play area, y grows downward. Entities are positioned by their top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Rectangular play area. Bounds are `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

/// The single persisted high-score record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub name: String,
    pub score: u32,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: PLAY_AREA_WIDTH,
            height: PLAY_AREA_HEIGHT,
        }
    }
}

impl PlayArea {
    /// True when the point lies outside `[0, width] x [0, height]`.
    pub fn is_outside(&self, pos: &Position) -> bool {
        pos.x < 0.0 || pos.x > self.width || pos.y < 0.0 || pos.y > self.height
    }
}

impl Default for HighScoreRecord {
    fn default() -> Self {
        Self {
            name: DEFAULT_HIGH_SCORE_NAME.to_string(),
            score: 0,
        }
    }
}

impl HighScoreRecord {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}
