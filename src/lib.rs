//! Stuey's Seagull Son - a one-button terminal flyer.
//!
//! Core modules:
//! - `entities`: pure data (player, obstacles, power-ups, session state)
//! - `physics`, `spawner`, `collision`: per-frame building blocks
//! - `compute`: the per-frame lifecycle pass (pure, RNG injected)
//! - `game`: the state machine that owns the session and its collaborators
//! - `audio`, `persistence`, `config`: the outside world

pub mod audio;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod persistence;
pub mod physics;
pub mod spawner;

pub use error::{GameError, Result};
pub use game::Game;

/// Gameplay tuning, in logical pixels and simulation frames.
pub mod consts {
    // Default playfield size
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Player
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const GRAVITY: f32 = 0.6;
    /// Added to the velocity on every jump (negative = upward)
    pub const LIFT: f32 = -15.0;

    /// Every scrolling entity moves left by this much per frame
    pub const SCROLL_SPEED: f32 = 5.0;

    // Chimneys
    pub const CHIMNEY_WIDTH: f32 = 60.0;
    /// Gap = playfield height / this
    pub const CHIMNEY_GAP_DIVISOR: f32 = 3.5;
    /// Preferred minimum height of either barrier
    pub const CHIMNEY_MARGIN: f32 = 50.0;
    pub const CHIMNEY_CHANCE: f64 = 0.6;

    // Crabs
    pub const CRAB_WIDTH: f32 = 40.0;
    pub const CRAB_HEIGHT: f32 = 30.0;

    // Power-ups (fries)
    pub const POWER_UP_WIDTH: f32 = 25.0;
    pub const POWER_UP_HEIGHT: f32 = 35.0;
    /// Vertical spawn band as fractions of the playfield height
    pub const POWER_UP_BAND: (f32, f32) = (0.2, 0.8);

    // Spawn cadence in frames
    pub const OBSTACLE_INTERVAL: u64 = 90;
    pub const POWER_UP_INTERVAL: u64 = 150;

    // Score awards
    pub const OBSTACLE_SCORE: u32 = 1;
    pub const POWER_UP_SCORE: u32 = 5;
}
