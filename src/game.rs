//! Core game state and logic

use crate::board::Board;
use crate::factory::PieceFactory;
use crate::piece::Piece;
use crate::score::Score;
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Not started yet; ticks do nothing
    Stopped,
    Running,
    Paused,
}

/// Commands a session accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Toggle between Running and Paused
    Pause,
    Restart,
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
}

/// Callbacks out of the engine
pub trait GameObserver {
    /// Called after every state change with the board and the active piece
    fn render(&mut self, _board: &Board, _piece: &Piece) {}

    /// Called when a freshly spawned piece has no room. The session has
    /// already been reset by the time this runs.
    fn game_over(&mut self) {}
}

/// The main game struct
pub struct Game<R = ChaCha8Rng> {
    /// The game board
    pub board: Board,
    /// Current falling piece
    pub current_piece: Piece,
    /// Piece randomizer
    factory: PieceFactory<R>,
    /// Score and gravity pacing
    pub score: Score,
    state: GameState,
    /// Falling time accumulated since the last gravity step
    gravity_timer: Duration,
    observer: Option<Box<dyn GameObserver>>,
    /// Number of game overs this session
    pub games_over: u32,
}

impl Game<ChaCha8Rng> {
    /// Create a new game with an entropy-seeded randomizer
    pub fn new() -> Self {
        Self::with_factory(PieceFactory::new())
    }

    /// Create a new game whose piece sequence is fixed by `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::with_factory(PieceFactory::with_seed(seed))
    }
}

impl Default for Game<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Game<R> {
    pub fn with_factory(mut factory: PieceFactory<R>) -> Self {
        let current_piece = factory.spawn();
        Self {
            board: Board::new(),
            current_piece,
            factory,
            score: Score::new(),
            state: GameState::Stopped,
            gravity_timer: Duration::ZERO,
            observer: None,
            games_over: 0,
        }
    }

    /// Install the render / game-over callbacks
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
        self.render();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Process a command
    pub fn process_command(&mut self, command: Command) {
        let changed = match command {
            Command::Start => self.start(),
            Command::Pause => self.toggle_pause(),
            Command::Restart => {
                tracing::info!(score = self.score.points, "restart requested");
                self.reset();
                true
            }
            _ if self.state == GameState::Stopped => false,
            Command::MoveLeft => self.current_piece.move_left(&self.board),
            Command::MoveRight => self.current_piece.move_right(&self.board),
            Command::SoftDrop => self.current_piece.move_down(&self.board),
            Command::Rotate => self.current_piece.rotate(&self.board),
            Command::HardDrop => self.current_piece.hard_drop(&self.board) > 0,
        };

        if changed {
            self.render();
        }
    }

    fn start(&mut self) -> bool {
        if self.state != GameState::Stopped {
            return false;
        }
        tracing::info!("game started");
        self.state = GameState::Running;
        true
    }

    fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            GameState::Running => GameState::Paused,
            GameState::Paused => GameState::Running,
            GameState::Stopped => return false,
        };
        tracing::info!(state = ?self.state, "pause toggled");
        true
    }

    /// Advance the game by one scheduler tick.
    ///
    /// Only Running ticks do anything. Elapsed time accumulates until it reaches
    /// the gravity interval, then a single gravity step runs and the interval
    /// is taken off the accumulator; the remainder carries into the next step.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.state != GameState::Running {
            return;
        }

        self.gravity_timer += elapsed;
        let interval = self.score.gravity_interval();
        if self.gravity_timer < interval {
            return;
        }
        self.gravity_timer -= interval;
        self.step();
    }

    /// One gravity step: fall one row, or lock and bring in the next piece
    pub fn step(&mut self) {
        if !self.current_piece.move_down(&self.board) {
            self.lock_piece();
            self.spawn_piece();
        }
        self.render();
    }

    /// Lock the current piece and clear any completed lines
    fn lock_piece(&mut self) {
        self.board.lock(&self.current_piece);

        let lines_cleared = self.board.clear_lines();
        let gained = self.score.add_clear(lines_cleared);
        tracing::debug!(
            piece = %self.current_piece.piece_type.name(),
            x = self.current_piece.x,
            y = self.current_piece.y,
            lines_cleared,
            gained,
            "piece locked"
        );
    }

    /// Replace the active piece with a fresh one from the factory.
    ///
    /// Returns false when the new piece has no room, in which case the
    /// observer is told about the game over and the session is reset.
    pub fn spawn_piece(&mut self) -> bool {
        self.current_piece = self.factory.spawn();
        if self.current_piece.fits(&self.board) {
            return true;
        }

        tracing::info!(
            score = self.score.points,
            lines = self.score.lines,
            "game over"
        );
        self.games_over += 1;
        self.reset();
        if let Some(observer) = self.observer.as_mut() {
            observer.game_over();
        }
        false
    }

    /// Fresh board, zero score, default pacing, new piece, Running
    fn reset(&mut self) {
        self.board = Board::new();
        self.score = Score::new();
        self.current_piece = self.factory.spawn();
        self.gravity_timer = Duration::ZERO;
        self.state = GameState::Running;
        self.render();
    }

    fn render(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer.render(&self.board, &self.current_piece);
        }
    }
}
