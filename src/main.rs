mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::thread_rng;

use seagull_son::audio::{AudioSink, Silent, TerminalBell};
use seagull_son::config::Settings;
use seagull_son::persistence::FileHighScore;
use seagull_son::Game;

use display::background::Sky;

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log lines go to a file: anything on stderr would tear the alternate screen.
fn init_logging() {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let path = PathBuf::from(home).join(".seagull_son.log");
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// A key counts as held while its press/repeat events keep arriving within
/// this long of each other.  OS key-repeat runs at 15 Hz or faster, so a
/// held key refreshes the window before it expires.
const HOLD_WINDOW: Duration = Duration::from_millis(133);

#[derive(Debug, PartialEq)]
enum Command {
    Activate,
    /// Any Space event; `SpaceKey` decides whether it is a fresh press.
    Space(KeyEventKind),
    Quit,
    None,
}

/// Map a terminal event onto what the game cares about.
fn classify(ev: &Event) -> Command {
    match ev {
        Event::Key(KeyEvent {
            code: KeyCode::Char(' '),
            kind,
            ..
        }) => Command::Space(*kind),
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
            _ => Command::None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => Command::Activate,
        // Resizes are picked up by re-reading the terminal size every frame
        _ => Command::None,
    }
}

/// Turns the Space event stream into one activation per physical press.
///
/// Keyboard-enhancement terminals report `Repeat` and `Release`, which make
/// this exact.  Classic terminals deliver OS auto-repeat as more `Press`
/// events, so a press arriving within the hold window of the previous Space
/// event is treated as the same key still being held.
struct SpaceKey {
    last_seen: Option<u64>,
    window: u64,
}

impl SpaceKey {
    fn new(fps: u32) -> Self {
        let frames = u128::from(fps.max(1)) * HOLD_WINDOW.as_millis() / 1000;
        Self {
            last_seen: None,
            window: frames.max(1) as u64,
        }
    }

    fn is_held(&self, frame: u64) -> bool {
        self.last_seen
            .map(|last| frame.saturating_sub(last) <= self.window)
            .unwrap_or(false)
    }

    /// Record a Space event seen on `frame`; true if it starts a new press.
    fn fresh_press(&mut self, kind: KeyEventKind, frame: u64) -> bool {
        match kind {
            KeyEventKind::Press => {
                let fresh = !self.is_held(frame);
                self.last_seen = Some(frame);
                fresh
            }
            KeyEventKind::Repeat => {
                self.last_seen = Some(frame);
                false
            }
            KeyEventKind::Release => {
                self.last_seen = None;
                false
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    settings: &Settings,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let field = settings.playfield();
    let frame_time = settings.frame_duration();

    let audio: Box<dyn AudioSink> = if settings.sound {
        Box::new(TerminalBell::new(stdout()))
    } else {
        Box::new(Silent)
    };
    let store = FileHighScore::new(settings.high_score_path.clone());
    let mut game = Game::new(field, audio, store);
    let mut sky = Sky::new(&mut rng, &field);
    let mut space = SpaceKey::new(settings.fps);
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match classify(&ev) {
                Command::Activate => {
                    game.activate();
                }
                Command::Space(kind) => {
                    if space.fresh_press(kind, frame) {
                        game.activate();
                    }
                }
                Command::Quit => return Ok(()),
                Command::None => {}
            }
        }

        sky.advance(&mut rng, &field);
        game.frame(&mut rng);

        display::render(out, game.state(), &sky, terminal::size()?)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();
    let settings = Settings::load();
    info!("starting with {settings:?}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Ask for repeat and release events; terminals without the keyboard
    // protocol refuse and fall back to plain presses.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &settings, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
