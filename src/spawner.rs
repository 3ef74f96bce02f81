//! Procedural spawning of obstacles and power-ups.
//!
//! Cadence is a pure function of the run's frame counter; all randomness
//! comes through the injected RNG.

use log::debug;
use rand::Rng;

use crate::consts::{
    CHIMNEY_CHANCE, CHIMNEY_GAP_DIVISOR, CHIMNEY_MARGIN, CHIMNEY_WIDTH, CRAB_HEIGHT, CRAB_WIDTH,
    OBSTACLE_INTERVAL, POWER_UP_BAND, POWER_UP_HEIGHT, POWER_UP_INTERVAL, POWER_UP_WIDTH,
    SCROLL_SPEED,
};
use crate::entities::{Anchor, Obstacle, ObstacleKind, Playfield, PowerUp};

pub fn obstacle_due(frame: u64) -> bool {
    frame > 0 && frame % OBSTACLE_INTERVAL == 0
}

pub fn power_up_due(frame: u64) -> bool {
    frame > 0 && frame % POWER_UP_INTERVAL == 0
}

/// Height of the passage through a chimney.
pub fn chimney_gap(playfield: &Playfield) -> f32 {
    playfield.height / CHIMNEY_GAP_DIVISOR
}

/// Draw from `[low, high]`, collapsing an inverted range onto `low`.
fn draw<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..=high)
    } else {
        low
    }
}

/// A new obstacle at the right edge: ~60% chimney, ~40% crab.
pub fn spawn_obstacle<R: Rng>(rng: &mut R, playfield: &Playfield) -> Obstacle {
    if rng.gen_bool(CHIMNEY_CHANCE) {
        spawn_chimney(rng, playfield)
    } else {
        spawn_crab(rng, playfield)
    }
}

pub fn spawn_chimney<R: Rng>(rng: &mut R, playfield: &Playfield) -> Obstacle {
    let gap = chimney_gap(playfield);
    let max_top = (playfield.height - gap).max(0.0);
    // Keep the margin on both barriers unless the field is too short for it
    let margin = CHIMNEY_MARGIN.min(max_top / 2.0);
    let top = draw(rng, margin, max_top - margin);
    let bottom = (playfield.height - top - gap).max(0.0);
    debug!("spawned chimney top={top:.1} bottom={bottom:.1}");
    Obstacle {
        x: playfield.width,
        width: CHIMNEY_WIDTH,
        speed: SCROLL_SPEED,
        kind: ObstacleKind::Chimney { top, bottom },
    }
}

pub fn spawn_crab<R: Rng>(rng: &mut R, playfield: &Playfield) -> Obstacle {
    let (anchor, y) = if rng.gen_bool(0.5) {
        (Anchor::Ceiling, 0.0)
    } else {
        (Anchor::Floor, (playfield.height - CRAB_HEIGHT).max(0.0))
    };
    debug!("spawned crab on {anchor:?}");
    Obstacle {
        x: playfield.width,
        width: CRAB_WIDTH,
        speed: SCROLL_SPEED,
        kind: ObstacleKind::Crab {
            anchor,
            y,
            height: CRAB_HEIGHT,
        },
    }
}

/// A power-up at the right edge, somewhere in the middle 60% of the field.
pub fn spawn_power_up<R: Rng>(rng: &mut R, playfield: &Playfield) -> PowerUp {
    let (lo, hi) = POWER_UP_BAND;
    let y = draw(rng, playfield.height * lo, playfield.height * hi);
    debug!("spawned power-up y={y:.1}");
    PowerUp {
        x: playfield.width,
        y,
        width: POWER_UP_WIDTH,
        height: POWER_UP_HEIGHT,
        speed: SCROLL_SPEED,
    }
}
