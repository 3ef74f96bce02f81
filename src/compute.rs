//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG; anything the
//! outside world should hear about is reported as a `GameEvent`.

use rand::Rng;

use crate::collision::{obstacle_hits, power_up_hits};
use crate::consts::{OBSTACLE_SCORE, POWER_UP_SCORE};
use crate::entities::{GameEvent, GameState, GameStatus, Obstacle, Playfield, Player, PowerUp};
use crate::spawner::{obstacle_due, power_up_due, spawn_obstacle, spawn_power_up};

// ── Constructors ─────────────────────────────────────────────────────────────

/// The title-screen state for a session.
pub fn init_state(playfield: Playfield, high_score: u32) -> GameState {
    GameState {
        player: Player::new(&playfield),
        obstacles: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        high_score,
        status: GameStatus::Start,
        frame: 0,
        playfield,
    }
}

/// Begin a run from any state: new player, empty field, zero score.
pub fn start_run(state: &GameState) -> GameState {
    GameState {
        player: Player::new(&state.playfield),
        obstacles: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        status: GameStatus::Playing,
        frame: 0,
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Apply one jump impulse.  Ignored unless a run is in progress.
pub fn jump(state: &GameState) -> GameState {
    if state.status != GameStatus::Playing {
        return state.clone();
    }
    GameState {
        player: state.player.jumped(),
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Outside `Playing` the state is returned unchanged.  A crash is applied
/// at the end of the frame, after every entity has been processed, so the
/// recorded high score always matches the score shown on the game-over
/// screen.
pub fn tick<R: Rng>(state: &GameState, rng: &mut R) -> (GameState, Vec<GameEvent>) {
    if state.status != GameStatus::Playing {
        return (state.clone(), Vec::new());
    }

    let field = state.playfield;
    let frame = state.frame + 1;
    let mut events = Vec::new();
    let mut score = state.score;

    // ── 1. Player physics ────────────────────────────────────────────────────
    let player = state.player.step(&field);

    // ── 2. Obstacles: spawn, advance, collide, retire ────────────────────────
    let mut spawned = state.obstacles.clone();
    if obstacle_due(frame) {
        spawned.push(spawn_obstacle(rng, &field));
    }

    let mut crashed = false;
    let mut obstacles: Vec<Obstacle> = Vec::with_capacity(spawned.len());
    for obstacle in spawned.iter().map(Obstacle::advanced) {
        if obstacle_hits(&obstacle, &player, &field) {
            // A hit obstacle stays put and is never scored
            crashed = true;
            obstacles.push(obstacle);
        } else if obstacle.is_offscreen() {
            score += OBSTACLE_SCORE;
            events.push(GameEvent::ObstaclePassed);
        } else {
            obstacles.push(obstacle);
        }
    }

    // ── 3. Power-ups: spawn, advance, collect, retire ────────────────────────
    let mut spawned = state.power_ups.clone();
    if power_up_due(frame) {
        spawned.push(spawn_power_up(rng, &field));
    }

    let power_ups: Vec<PowerUp> = spawned
        .iter()
        .map(PowerUp::advanced)
        .filter(|p| {
            if power_up_hits(p, &player) {
                score += POWER_UP_SCORE;
                events.push(GameEvent::PowerUpCollected);
                false
            } else {
                !p.is_offscreen()
            }
        })
        .collect();

    // ── 4. Outcome ───────────────────────────────────────────────────────────
    let (status, high_score) = if crashed {
        events.push(GameEvent::Crashed);
        (GameStatus::GameOver, state.high_score.max(score))
    } else {
        (GameStatus::Playing, state.high_score)
    };

    let next = GameState {
        player,
        obstacles,
        power_ups,
        score,
        high_score,
        status,
        frame,
        ..state.clone()
    };
    (next, events)
}
