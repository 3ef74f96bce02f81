//! Per-frame motion.
//!
//! Like the rest of the simulation these return fresh values instead of
//! mutating, so a frame can be computed from an immutable snapshot.

use crate::consts::{GRAVITY, LIFT, PLAYER_SIZE};
use crate::entities::{Obstacle, Playfield, Player, PowerUp};

impl Player {
    /// A fresh player a quarter of the way in, vertically centred, at rest.
    pub fn new(playfield: &Playfield) -> Self {
        Player {
            x: playfield.width / 4.0,
            y: playfield.height / 2.0,
            velocity: 0.0,
            gravity: GRAVITY,
            lift: LIFT,
            size: PLAYER_SIZE,
        }
    }

    /// Integrate one frame: gravity, then position, then clamp to the field.
    ///
    /// The clamp constrains `y` only.  `velocity` keeps growing while the
    /// player rests on the floor, so the first jump after a long fall has to
    /// cancel all of it before the bird moves up.
    pub fn step(&self, playfield: &Playfield) -> Player {
        let velocity = self.velocity + self.gravity;
        let floor = (playfield.height - self.size / 2.0).max(0.0);
        let y = (self.y + velocity).clamp(0.0, floor);
        Player {
            y,
            velocity,
            ..self.clone()
        }
    }

    /// Add the lift impulse.  Jumps stack: the current velocity is not reset.
    pub fn jumped(&self) -> Player {
        Player {
            velocity: self.velocity + self.lift,
            ..self.clone()
        }
    }

    /// Centre of the circle used against obstacles.
    pub fn hit_centre(&self) -> (f32, f32) {
        (self.x + self.size / 2.0, self.y)
    }

    pub fn hit_radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Full bounding box `(x, y, w, h)` used against power-ups.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y - self.size / 2.0, self.size, self.size)
    }
}

impl Obstacle {
    pub fn advanced(&self) -> Obstacle {
        Obstacle {
            x: self.x - self.speed,
            ..self.clone()
        }
    }

    /// Fully past the left edge.
    pub fn is_offscreen(&self) -> bool {
        self.x < -self.width
    }
}

impl PowerUp {
    pub fn advanced(&self) -> PowerUp {
        PowerUp {
            x: self.x - self.speed,
            ..self.clone()
        }
    }

    pub fn is_offscreen(&self) -> bool {
        self.x < -self.width
    }
}
