//! # Connect Four Search
//!
//! Connect Four with a depth-limited game-tree AI. Ships a terminal UI built
//! with Ratatui and a headless `compare` tool that pits plain minimax against
//! alpha-beta pruning on the same position.
//!
//! ## Modules
//!
//! - [`game`]: board, player and game state
//! - [`ai`]: position heuristic, minimax, alpha-beta and agents
//! - [`session`]: background search jobs, headless games, session statistics
//! - [`ui`]: terminal game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;
