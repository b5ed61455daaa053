//! Game loop driver: couples a [`Game`] to a clock and a ticker

use crate::game::{Command, Game, GameObserver, GameState};
use crate::gesture::{GestureMapper, Point};
use crate::scheduler::{Clock, SystemClock, Ticker};
use rand::RngCore;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// A running game plus the scheduler that feeds it ticks
pub struct Session<C = SystemClock, R = ChaCha8Rng> {
    game: Game<R>,
    ticker: Ticker,
    clock: C,
    gestures: GestureMapper,
}

impl<C: Clock, R: RngCore> Session<C, R> {
    pub fn new(game: Game<R>, clock: C, cadence: Duration) -> Self {
        Self {
            game,
            ticker: Ticker::new(cadence),
            clock,
            gestures: GestureMapper::default(),
        }
    }

    /// Replace the gesture classifier (e.g. to change its threshold)
    pub fn with_gestures(mut self, gestures: GestureMapper) -> Self {
        self.gestures = gestures;
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.game.set_observer(observer);
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game<R> {
        &mut self.game
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_running()
    }

    /// Forward a command, keeping the ticker in step with the game state.
    ///
    /// Start arms the ticker. Restart re-arms it so the new game never sees a
    /// tick measured against the old one.
    pub fn command(&mut self, command: Command) {
        let was = self.game.state();
        self.game.process_command(command);
        let now = self.clock.now();

        match command {
            Command::Start if was == GameState::Stopped => self.ticker.start(now),
            Command::Restart => self.ticker.start(now),
            _ => {}
        }
    }

    /// Classify a completed gesture and apply the resulting command
    pub fn gesture(&mut self, start: Point, end: Point) -> Command {
        let command = self.gestures.classify(start, end);
        tracing::debug!(?start, ?end, ?command, "gesture");
        self.command(command);
        command
    }

    /// Run one tick if one is due. Returns whether a tick fired.
    pub fn pump(&mut self) -> bool {
        match self.ticker.poll(self.clock.now()) {
            Some(elapsed) => {
                self.game.tick(elapsed);
                true
            }
            None => false,
        }
    }

    /// How long the caller may sleep before the next tick is due
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        self.ticker.time_until_next(self.clock.now())
    }

    /// Stop the ticker; the game keeps its state but no more ticks arrive
    pub fn stop(&mut self) {
        self.ticker.stop();
    }
}
