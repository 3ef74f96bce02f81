//! All game entity types: pure data, no logic.

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

// ── Top-level flow ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen, waiting for the first activation.
    Start,
    Playing,
    /// Simulation frozen, waiting for activation to restart.
    GameOver,
}

/// Something that happened during a frame which the outside world may
/// want to react to (sound cues, logging).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    RunStarted,
    Jumped,
    /// An obstacle left the screen without being hit.
    ObstaclePassed,
    PowerUpCollected,
    Crashed,
}

// ── Playfield ─────────────────────────────────────────────────────────────────

/// The visible simulation area, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

/// The seagull.  `x` never changes; `y` is the vertical centre line used by
/// physics and collision.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    /// Positive = downward.
    pub velocity: f32,
    pub gravity: f32,
    pub lift: f32,
    pub size: f32,
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Which edge of the playfield a crab clings to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Ceiling,
    Floor,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ObstacleKind {
    /// Two barriers with a passage between them.
    /// `top + gap + bottom == playfield height`.
    Chimney { top: f32, bottom: f32 },
    /// A rectangle stuck to the ceiling or the floor.
    Crab { anchor: Anchor, y: f32, height: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    pub speed: f32,
    pub kind: ObstacleKind,
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
    /// Never decreases within a run.
    pub score: u32,
    /// Best score across runs, as persisted.
    pub high_score: u32,
    pub status: GameStatus,
    /// Frames elapsed in the current run; drives the spawn cadence.
    pub frame: u64,
    pub playfield: Playfield,
}
