//! Hosts for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Wire**: validates client symbol boards before they reach the engine
//! - **HTTP**: axum routes for move suggestions and board status
//! - **Play**: terminal match between a human and the engine
//! - **Config**: TOML server settings with command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod http;
pub mod play;
pub mod wire;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - HTTP API
pub use http::{
    AppState, BoardRequest, ErrorResponse, MoveResponse, OutcomeLabel, StatusResponse, router,
    serve,
};

// Crate-level exports - Terminal play
pub use play::{EnginePlayer, HeuristicPlayer, HumanPlayer, Match, Player, parse_human_move};

// Crate-level exports - Wire boundary
pub use wire::{BoardError, BoardErrorKind, EMPTY_SYMBOL, SymbolMap, parse_board, split_compact};
