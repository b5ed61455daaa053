//! Falling-block puzzle engine
//!
//! The board, pieces, collision rules, line clears and pacing live here, along
//! with a tick scheduler and a gesture classifier. Drawing and notifications
//! are left to whoever implements [`game::GameObserver`].

pub mod board;
pub mod factory;
pub mod game;
pub mod gesture;
pub mod piece;
pub mod scheduler;
pub mod score;
pub mod session;
pub mod shape;
pub mod tetromino;
