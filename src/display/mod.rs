//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! logical pixels into terminal cells and cells into terminal commands.

pub mod background;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use seagull_son::entities::{GameState, GameStatus, Obstacle, ObstacleKind, Playfield, PowerUp};

use background::Sky;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SKY: Color = Color::Rgb { r: 135, g: 206, b: 250 };
const C_HUD: Color = Color::Black;
const C_CLOUD_FAR: Color = Color::Grey;
const C_CLOUD_NEAR: Color = Color::White;
const C_GULL: Color = Color::White;
const C_BEAK: Color = Color::Yellow;
const C_CHIMNEY: Color = Color::DarkYellow;
const C_CHIMNEY_CAP: Color = Color::DarkGrey;
const C_CRAB: Color = Color::Red;
const C_FRIES: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "SPACE / click : Flap   Q : Quit";

// ── Logical → cell mapping ────────────────────────────────────────────────────

/// The terminal area the playfield is stretched onto: every column, and
/// every row between the HUD (row 0) and the hint line (last row).
#[derive(Clone, Copy, Debug)]
struct Viewport {
    cols: u16,
    rows: u16,
    field: Playfield,
}

impl Viewport {
    fn new(size: (u16, u16), field: Playfield) -> Self {
        Self {
            cols: size.0.max(1),
            rows: size.1,
            field,
        }
    }

    fn play_rows(&self) -> u16 {
        self.rows.saturating_sub(2).max(1)
    }

    fn col(&self, x: f32) -> i32 {
        (x / self.field.width * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        1 + (y / self.field.height * self.play_rows() as f32).floor() as i32
    }

    /// Cell span `[c0, c1) × [r0, r1)` of a logical rectangle, clipped to
    /// the play area.  Non-empty rectangles cover at least one cell.
    fn cells(&self, x: f32, y: f32, w: f32, h: f32) -> Option<(u16, u16, u16, u16)> {
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        let (c0, r0) = (self.col(x), self.row(y));
        let c1 = self.col(x + w).max(c0 + 1).min(self.cols as i32);
        let r1 = self.row(y + h).max(r0 + 1).min(1 + self.play_rows() as i32);
        let (c0, r0) = (c0.max(0), r0.max(1));
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((c0 as u16, c1 as u16, r0 as u16, r1 as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for a terminal of `size` (columns, rows).
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    sky: &Sky,
    size: (u16, u16),
) -> std::io::Result<()> {
    let view = Viewport::new(size, state.playfield);
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_sky(out, &view, sky)?;

    match state.status {
        GameStatus::Start => draw_start_screen(out, &view, state)?,
        GameStatus::Playing => {
            draw_world(out, &view, state)?;
            draw_hud(out, &view, state)?;
        }
        GameStatus::GameOver => {
            draw_world(out, &view, state)?;
            draw_game_over(out, &view, state)?;
        }
    }
    draw_controls_hint(out, &view)?;

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fill<W: Write>(
    out: &mut W,
    (c0, c1, r0, r1): (u16, u16, u16, u16),
    glyph: char,
    color: Color,
) -> std::io::Result<()> {
    let line: String = std::iter::repeat(glyph).take((c1 - c0) as usize).collect();
    out.queue(style::SetForegroundColor(color))?;
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn centred<W: Write>(
    out: &mut W,
    view: &Viewport,
    row: u16,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Background ────────────────────────────────────────────────────────────────

fn draw_sky<W: Write>(out: &mut W, view: &Viewport, sky: &Sky) -> std::io::Result<()> {
    for layer in &sky.layers {
        let (glyph, color) = if layer.far {
            ('░', C_CLOUD_FAR)
        } else {
            ('▒', C_CLOUD_NEAR)
        };
        for cloud in &layer.clouds {
            // Clouds are ellipses twice as wide as they are tall
            let rect = view.cells(
                cloud.x - cloud.size,
                cloud.y - cloud.size * 0.7,
                cloud.size * 2.0,
                cloud.size * 1.4,
            );
            if let Some(cells) = rect {
                fill(out, cells, glyph, color)?;
            }
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_world<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    for obstacle in &state.obstacles {
        draw_obstacle(out, view, obstacle)?;
    }
    for power_up in &state.power_ups {
        draw_power_up(out, view, power_up)?;
    }
    draw_player(out, view, state)
}

fn draw_player<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    // Sprite (1 row):  ~v>   body + wing, then the beak
    let p = &state.player;
    let col = view.col(p.x).clamp(0, view.cols.saturating_sub(3) as i32) as u16;
    let row = view.row(p.y).clamp(1, view.play_rows() as i32) as u16;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_GULL))?;
    out.queue(Print("~v"))?;
    out.queue(style::SetForegroundColor(C_BEAK))?;
    out.queue(Print(">"))?;
    Ok(())
}

fn draw_obstacle<W: Write>(
    out: &mut W,
    view: &Viewport,
    obstacle: &Obstacle,
) -> std::io::Result<()> {
    let field = view.field;
    match obstacle.kind {
        ObstacleKind::Chimney { top, bottom } => {
            // Brick columns with a grey cap facing the gap
            let upper = view.cells(obstacle.x, 0.0, obstacle.width, top);
            let lower = view.cells(obstacle.x, field.height - bottom, obstacle.width, bottom);
            if let Some(cells) = upper {
                fill(out, cells, '█', C_CHIMNEY)?;
                let (c0, c1, _, r1) = cells;
                fill(out, (c0, c1, r1 - 1, r1), '▀', C_CHIMNEY_CAP)?;
            }
            if let Some(cells) = lower {
                fill(out, cells, '█', C_CHIMNEY)?;
                let (c0, c1, r0, _) = cells;
                fill(out, (c0, c1, r0, r0 + 1), '▄', C_CHIMNEY_CAP)?;
            }
        }
        ObstacleKind::Crab { y, height, .. } => {
            if let Some(cells) = view.cells(obstacle.x, y, obstacle.width, height) {
                fill(out, cells, '▓', C_CRAB)?;
                let (c0, c1, r0, _) = cells;
                if c1 - c0 >= 3 {
                    out.queue(cursor::MoveTo(c0, r0))?;
                    out.queue(Print("°.°"))?;
                }
            }
        }
    }
    Ok(())
}

fn draw_power_up<W: Write>(out: &mut W, view: &Viewport, p: &PowerUp) -> std::io::Result<()> {
    if let Some(cells) = view.cells(p.x, p.y, p.width, p.height) {
        fill(out, cells, '‖', C_FRIES)?;
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(Print(format!("Score: {}", state.score)))?;

    let best = format!("High Score: {}", state.high_score);
    let rx = view.cols.saturating_sub(best.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(Print(&best))?;
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_start_screen<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
) -> std::io::Result<()> {
    let third = view.rows / 3;
    let mid = view.rows / 2;
    centred(out, view, third, "Stuey's Seagull Son", Color::Black)?;
    centred(out, view, mid, "Press SPACE or click to start", Color::Black)?;
    centred(
        out,
        view,
        mid + 2,
        &format!("High Score: {}", state.high_score),
        Color::Black,
    )
}

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &Viewport,
    state: &GameState,
) -> std::io::Result<()> {
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
    ];
    let score_line = format!("Score: {}", state.score);
    let best_line = format!("High Score: {}", state.high_score);

    let start_row = (view.rows / 2).saturating_sub(3);
    for (i, (msg, color)) in lines.iter().enumerate() {
        centred(out, view, start_row + i as u16, msg, *color)?;
    }
    let row = start_row + lines.len() as u16;
    centred(out, view, row, &score_line, Color::Black)?;
    centred(out, view, row + 1, &best_line, Color::Black)?;
    centred(out, view, row + 2, "SPACE / click to play again", Color::Black)?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_clip_to_play_area() {
        let view = Viewport::new((80, 24), Playfield::default());
        // Fully left of the screen
        assert!(view.cells(-100.0, 10.0, 50.0, 50.0).is_none());
        // Whole field maps onto rows 1..23
        assert_eq!(view.cells(0.0, 0.0, 800.0, 600.0), Some((0, 80, 1, 23)));
    }

    #[test]
    fn thin_rects_still_cover_a_cell() {
        let view = Viewport::new((80, 24), Playfield::default());
        let (c0, c1, r0, r1) = view.cells(400.0, 300.0, 1.0, 1.0).unwrap();
        assert_eq!(c1 - c0, 1);
        assert_eq!(r1 - r0, 1);
    }
}
