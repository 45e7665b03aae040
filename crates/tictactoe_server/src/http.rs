//! HTTP API for the engine.
//!
//! - `POST /api/move`: the engine's move for a symbol board
//! - `POST /api/status`: winner and outcome of a symbol board
//! - `GET /health`: liveness check
//!
//! Every request carries its own board, so concurrent requests never share
//! one. The only shared state is the random generator behind the engine's
//! fallback path; each request seeds its own generator from it and releases
//! the lock before searching.
//!
//! Any body that is not a valid board request, including one axum cannot
//! deserialize, is answered with `400 {"error": ...}`.

use crate::config::ServerConfig;
use crate::wire::{BoardError, BoardErrorKind, SymbolMap, parse_board};
use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use derive_new::new;
use rand::{RngCore, SeedableRng};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};
use tictactoe_engine::{Outcome, Position, best_move, outcome};
use tracing::{info, instrument, warn};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Creates state with a seeded generator, or one seeded from entropy.
    #[instrument]
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Draws a generator for one request.
    ///
    /// The shared generator is locked only long enough to draw a seed, so
    /// searches never run under the lock. Under a fixed seed the sequence of
    /// request generators is reproducible.
    pub fn request_rng(&self) -> StdRng {
        let seed = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .next_u64();
        StdRng::seed_from_u64(seed)
    }
}

/// Request body for both board endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardRequest {
    /// Nine cell symbols in row-major order.
    pub board: Vec<String>,
    /// Symbol of the engine's side.
    #[serde(default = "default_ai")]
    pub ai: String,
    /// Symbol of the opponent.
    #[serde(default = "default_human")]
    pub human: String,
}

fn default_ai() -> String {
    "O".to_string()
}

fn default_human() -> String {
    "X".to_string()
}

/// Response body for `POST /api/move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct MoveResponse {
    /// Chosen cell index, or `null` when no empty cell remains.
    #[serde(rename = "move")]
    pub position: Option<usize>,
}

/// Outcome label on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeLabel {
    /// Game is ongoing.
    InProgress,
    /// Someone has three in a row.
    Win,
    /// Board is full with no winner.
    Draw,
}

impl From<Outcome> for OutcomeLabel {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => OutcomeLabel::InProgress,
            Outcome::Win(_) => OutcomeLabel::Win,
            Outcome::Draw => OutcomeLabel::Draw,
        }
    }
}

/// Response body for `POST /api/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StatusResponse {
    /// Winning symbol, if any.
    pub winner: Option<String>,
    /// Overall outcome.
    pub outcome: OutcomeLabel,
}

/// Error body returned with `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

/// Handler error: a rejected board.
#[derive(Debug, derive_more::From)]
pub struct ApiError(BoardError);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(BoardError::new(BoardErrorKind::Malformed(rejection.body_text())))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self.0, "Rejected request");
        let body = ErrorResponse {
            error: self.0.kind.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Builds the API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/move", post(suggest_move))
        .route("/api/status", post(board_status))
        .route("/health", get(health))
        .with_state(state)
}

#[instrument(skip_all)]
async fn suggest_move(
    State(state): State<AppState>,
    payload: Result<Json<BoardRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ApiError> {
    let Json(request) = payload?;
    let symbols = SymbolMap::new(&request.ai, &request.human)?;
    let mut board = parse_board(&request.board, &symbols)?;

    let mut rng = state.request_rng();
    let position = best_move(&mut board, symbols.ai_mark(), symbols.human_mark(), &mut rng);

    info!(
        ai = %request.ai,
        human = %request.human,
        position = ?position.map(Position::to_index),
        "Suggested move"
    );
    Ok(Json(MoveResponse::new(position.map(Position::to_index))))
}

#[instrument(skip_all)]
async fn board_status(
    payload: Result<Json<BoardRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>, ApiError> {
    let Json(request) = payload?;
    let symbols = SymbolMap::new(&request.ai, &request.human)?;
    let board = parse_board(&request.board, &symbols)?;

    let result = outcome(&board);
    let winner = result.winner().map(|mark| symbols.symbol(mark).to_string());
    Ok(Json(StatusResponse::new(winner, result.into())))
}

async fn health() -> &'static str {
    "ok"
}

/// Runs the HTTP server until Ctrl-C.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: &ServerConfig) -> Result<()> {
    let state = AppState::from_seed(*config.seed());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
