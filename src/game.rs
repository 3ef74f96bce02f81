//! The game state machine.
//!
//! `start → playing → gameOver → playing → …`, forever.  `Game` is the only
//! writer of the session: it feeds the pure `compute` functions, swaps in the
//! state they return and turns their events into calls on the audio and
//! persistence collaborators.

use log::{info, warn};
use rand::Rng;

use crate::audio::{cue, ensure_looping, AudioSink, Sound};
use crate::compute::{init_state, jump, start_run, tick};
use crate::entities::{GameEvent, GameState, GameStatus, Playfield};
use crate::persistence::HighScoreStore;

/// One play session: the current state plus its audio and high-score collaborators.
pub struct Game<A: AudioSink, S: HighScoreStore> {
    state: GameState,
    audio: A,
    store: S,
}

impl<A: AudioSink, S: HighScoreStore> Game<A, S> {
    /// A session on the title screen, with the high score read from `store`.
    pub fn new(playfield: Playfield, audio: A, store: S) -> Self {
        let high_score = store.load();
        info!("session opened, high score {high_score}");
        Self {
            state: init_state(playfield, high_score),
            audio,
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The single player action: flap while playing, otherwise (re)start.
    pub fn activate(&mut self) -> GameEvent {
        match self.state.status {
            GameStatus::Playing => {
                self.state = jump(&self.state);
                cue(&mut self.audio, Sound::Jump);
                GameEvent::Jumped
            }
            GameStatus::Start | GameStatus::GameOver => {
                self.begin_run();
                GameEvent::RunStarted
            }
        }
    }

    /// Run one simulation frame and react to what happened in it.
    pub fn frame<R: Rng>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        let before = self.state.status;
        let previous_best = self.state.high_score;
        let (next, events) = tick(&self.state, rng);
        self.state = next;

        for event in &events {
            if *event == GameEvent::PowerUpCollected {
                cue(&mut self.audio, Sound::Point);
            }
        }

        if before == GameStatus::Playing && self.state.status == GameStatus::GameOver {
            self.enter_game_over(previous_best);
        }
        events
    }

    fn begin_run(&mut self) {
        ensure_looping(&mut self.audio, Sound::Background);
        self.state = start_run(&self.state);
        info!("run started");
    }

    /// Runs exactly once per transition into `GameOver`.
    fn enter_game_over(&mut self, previous_best: u32) {
        self.audio.stop(Sound::Background);
        cue(&mut self.audio, Sound::Squawk);
        info!("game over, score {}", self.state.score);

        if self.state.high_score > previous_best {
            info!("new high score {}", self.state.high_score);
            if let Err(e) = self.store.save(self.state.high_score) {
                warn!("could not save high score: {e}");
            }
        }
    }
}
