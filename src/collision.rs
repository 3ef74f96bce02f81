//! Hit tests between the player and everything else.
//!
//! Obstacles are tested against a circle around the player; power-ups
//! against the player's full bounding box.  Keep the two shapes distinct;
//! unifying them changes how hard the game plays.

use crate::entities::{Anchor, Obstacle, ObstacleKind, Playfield, Player, PowerUp};

/// Inclusive axis-aligned rectangle overlap; touching edges count.
pub fn rect_rect(
    (x1, y1, w1, h1): (f32, f32, f32, f32),
    (x2, y2, w2, h2): (f32, f32, f32, f32),
) -> bool {
    x1 + w1 >= x2 && x1 <= x2 + w2 && y1 + h1 >= y2 && y1 <= y2 + h2
}

/// Whether the player's centre column is strictly inside `[x, x + width]`.
fn within_span(px: f32, x: f32, width: f32) -> bool {
    px > x && px < x + width
}

pub fn obstacle_hits(obstacle: &Obstacle, player: &Player, playfield: &Playfield) -> bool {
    let (px, py) = player.hit_centre();
    let r = player.hit_radius();
    if !within_span(px, obstacle.x, obstacle.width) {
        return false;
    }
    match obstacle.kind {
        ObstacleKind::Chimney { top, bottom } => {
            py - r < top || py + r > playfield.height - bottom
        }
        ObstacleKind::Crab { anchor, y, height } => match anchor {
            Anchor::Ceiling => py - r < y + height,
            Anchor::Floor => py + r > y,
        },
    }
}

pub fn power_up_hits(power_up: &PowerUp, player: &Player) -> bool {
    rect_rect(
        player.bounds(),
        (power_up.x, power_up.y, power_up.width, power_up.height),
    )
}
