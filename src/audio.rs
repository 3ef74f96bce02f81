//! Audio collaborator.
//!
//! The game only ever fires one-shot cues and toggles one looping track, so
//! a sink needs very little surface.  Sounds that are not loaded yet are
//! skipped, never reported as errors.

use std::io::Write;

use log::debug;

/// Every sound the game knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Looping music while a run is in progress
    Background,
    /// Player flapped
    Jump,
    /// Power-up collected
    Point,
    /// End of run
    Squawk,
}

/// Something that can play the game's sounds.
pub trait AudioSink {
    fn is_loaded(&self, sound: Sound) -> bool;
    fn is_playing(&self, sound: Sound) -> bool;
    fn play(&mut self, sound: Sound);
    fn loop_track(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn is_loaded(&self, sound: Sound) -> bool {
        (**self).is_loaded(sound)
    }

    fn is_playing(&self, sound: Sound) -> bool {
        (**self).is_playing(sound)
    }

    fn play(&mut self, sound: Sound) {
        (**self).play(sound)
    }

    fn loop_track(&mut self, sound: Sound) {
        (**self).loop_track(sound)
    }

    fn stop(&mut self, sound: Sound) {
        (**self).stop(sound)
    }
}

/// Play a one-shot cue if its asset is ready.
pub fn cue(audio: &mut dyn AudioSink, sound: Sound) {
    if audio.is_loaded(sound) {
        audio.play(sound);
    } else {
        debug!("{sound:?} not loaded, skipping");
    }
}

/// Start a looping track unless it is missing or already running.
pub fn ensure_looping(audio: &mut dyn AudioSink, sound: Sound) {
    if !audio.is_loaded(sound) {
        debug!("{sound:?} not loaded, skipping");
        return;
    }
    if !audio.is_playing(sound) {
        audio.loop_track(sound);
    }
}

/// Rings the terminal bell for the cues worth hearing.
///
/// There is no music in a terminal; the background "track" is only
/// tracked as a flag so the run-start logic behaves the same as with a real
/// mixer.
pub struct TerminalBell<W: Write> {
    out: W,
    background: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            background: false,
        }
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn is_loaded(&self, _sound: Sound) -> bool {
        true
    }

    fn is_playing(&self, sound: Sound) -> bool {
        sound == Sound::Background && self.background
    }

    fn play(&mut self, sound: Sound) {
        // A bell on every flap is just noise
        if matches!(sound, Sound::Point | Sound::Squawk) {
            let _ = self.out.write_all(b"\x07");
            let _ = self.out.flush();
        }
    }

    fn loop_track(&mut self, sound: Sound) {
        if sound == Sound::Background {
            self.background = true;
        }
    }

    fn stop(&mut self, sound: Sound) {
        if sound == Sound::Background {
            self.background = false;
        }
    }
}

/// No audio at all: nothing is ever loaded.
#[derive(Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn is_loaded(&self, _sound: Sound) -> bool {
        false
    }

    fn is_playing(&self, _sound: Sound) -> bool {
        false
    }

    fn play(&mut self, _sound: Sound) {}

    fn loop_track(&mut self, _sound: Sound) {}

    fn stop(&mut self, _sound: Sound) {}
}
