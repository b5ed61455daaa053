//! SWIPETRIS - falling blocks in the terminal
//!
//! Keyboard or mouse-drag gestures: tap to rotate, swipe to move,
//! swipe up to hard drop.

mod input;
mod settings;
mod ui;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use input::{KeyAction, KeyBindings};
use ratatui::{Terminal, backend::CrosstermBackend};
use settings::Settings;
use std::{
    io::{self, stdout},
    sync::mpsc::{self, Sender},
    time::{Duration, Instant},
};
use swipetris::board::Board;
use swipetris::game::{Game, GameObserver};
use swipetris::gesture::GestureTracker;
use swipetris::piece::Piece;
use swipetris::scheduler::SystemClock;
use swipetris::session::Session;

/// How long the game-over notice stays up after the automatic reset
const GAME_OVER_TOAST: Duration = Duration::from_secs(2);

/// Longest wait for input when no tick is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Engine callbacks, forwarded to the event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineEvent {
    Redraw,
    GameOver,
}

struct ChannelObserver(Sender<EngineEvent>);

impl GameObserver for ChannelObserver {
    fn render(&mut self, _board: &Board, _piece: &Piece) {
        // The receiver lives as long as the loop; a failed send means we are exiting
        let _ = self.0.send(EngineEvent::Redraw);
    }

    fn game_over(&mut self) {
        let _ = self.0.send(EngineEvent::GameOver);
    }
}

/// Summary printed after the terminal is restored
struct Outcome {
    score: u64,
    lines: u32,
    games_over: u32,
}

/// Get the swipetris temp directory, creating it if needed
fn swipetris_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("swipetris");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();

    let log_dir = swipetris_temp_dir();
    let log_file = format!("{:08x}.log", session_id);

    // Log to a file; the terminal belongs to the game
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::new("swipetris=debug"),
    };
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    tracing::info!(
        "SWIPETRIS starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = settings.save() {
        eprintln!("Warning: Could not save settings: {}", e);
    }

    if let Ok(outcome) = &result {
        println!("\nThanks for playing SWIPETRIS!");
        println!("Final Score: {} | Lines: {}", outcome.score, outcome.lines);
        if outcome.games_over > 0 {
            println!("Games lost along the way: {}", outcome.games_over);
        }
    }
    if let Err(e) = &result {
        tracing::error!("Terminal error: {}", e);
    }

    result.map(|_| ())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
) -> io::Result<Outcome> {
    let game = match settings.gameplay.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    let mut session = Session::new(game, SystemClock::new(), settings.gameplay.tick())
        .with_gestures(settings.gesture.mapper());

    let (tx, rx) = mpsc::channel();
    session.set_observer(Box::new(ChannelObserver(tx)));

    let keys = KeyBindings::from_settings(settings);
    let mut gestures = GestureTracker::new();
    let mut dirty = true;
    let mut toast_until: Option<Instant> = None;

    loop {
        for engine_event in rx.try_iter() {
            dirty = true;
            if engine_event == EngineEvent::GameOver {
                toast_until = Some(Instant::now() + GAME_OVER_TOAST);
            }
        }
        if toast_until.is_some_and(|until| Instant::now() >= until) {
            toast_until = None;
            dirty = true;
        }

        if dirty {
            let toast = toast_until.is_some();
            terminal.draw(|frame| ui::render_game(frame, session.game(), settings, toast))?;
            dirty = false;
        }

        let timeout = session
            .time_until_next_tick()
            .map_or(IDLE_POLL, |next| next.min(IDLE_POLL));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match keys.action(key) {
                    Some(KeyAction::Quit) => break,
                    Some(KeyAction::Game(command)) => session.command(command),
                    None => {}
                },
                Event::Mouse(mouse) => {
                    let at = settings.gesture.point(mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => gestures.begin(at),
                        MouseEventKind::Up(MouseButton::Left) => {
                            if let Some((start, end)) = gestures.end(at) {
                                session.gesture(start, end);
                            }
                        }
                        _ => {}
                    }
                }
                Event::FocusLost => gestures.cancel(),
                Event::Resize(_, _) => dirty = true,
                _ => {}
            }
        }

        session.pump();
    }

    session.stop();
    let game = session.game();
    tracing::info!(score = game.score.points, "exiting");
    Ok(Outcome {
        score: game.score.points,
        lines: game.score.lines,
        games_over: game.games_over,
    })
}
