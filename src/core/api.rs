//! HTTP API for Symtrack
//!
//! Endpoints:
//! - POST /patterns - Analyze a set of entries
//! - POST /summary - Dashboard summary for a set of entries
//! - GET /health - Health check
//!
//! Stateless: callers send the entries with every request.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::{EntryLog, PatternEngine};
use crate::types::{Pattern, Summary, SymptomRecord};

/// App state
pub struct AppState {
    pub engine: PatternEngine,
}

/// Analyze request
#[derive(Debug, Deserialize)]
pub struct PatternsRequest {
    pub entries: Vec<SymptomRecord>,
    /// Restrict to the last N days before `until`
    pub days: Option<u32>,
    /// Window end, defaults to today
    pub until: Option<NaiveDate>,
}

/// Analyze response
#[derive(Debug, Serialize)]
pub struct PatternsResponse {
    pub entries_analyzed: usize,
    pub patterns: Vec<Pattern>,
}

/// Summary request
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub entries: Vec<SymptomRecord>,
    /// Day the streak counts back from, defaults to today
    pub today: Option<NaiveDate>,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Create the API router
pub fn create_router(config: &Config) -> Router {
    let state = Arc::new(AppState {
        engine: PatternEngine::with_thresholds(config.thresholds),
    });

    Router::new()
        .route("/health", get(health))
        .route("/patterns", post(analyze_patterns))
        .route("/summary", post(summarize))
        .with_state(state)
}

/// Health check endpoint
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Analyze entries
async fn analyze_patterns(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PatternsRequest>,
) -> Result<Json<PatternsResponse>, ApiError> {
    let log = EntryLog::from_records(req.entries).map_err(bad_request)?;

    let entries = match req.days {
        Some(days) => log.window(req.until.unwrap_or_else(today), days),
        None => log.iter().cloned().collect(),
    };

    let patterns = state.engine.analyze(&entries);
    info!(entries = entries.len(), patterns = patterns.len(), "analyzed entries");

    Ok(Json(PatternsResponse {
        entries_analyzed: entries.len(),
        patterns,
    }))
}

/// Summarize entries
async fn summarize(Json(req): Json<SummaryRequest>) -> Result<Json<Summary>, ApiError> {
    let log = EntryLog::from_records(req.entries).map_err(bad_request)?;
    let entries: Vec<SymptomRecord> = log.iter().cloned().collect();
    Ok(Json(Summary::build(&entries, req.today.unwrap_or_else(today))))
}

fn bad_request(err: crate::Error) -> ApiError {
    warn!(error = %err, "rejected request");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Run the API server
pub async fn run_server(config: &Config) -> crate::Result<()> {
    let router = create_router(config);
    let listener = tokio::net::TcpListener::bind(config.addr.as_str()).await?;
    info!(addr = %config.addr, "api listening");
    println!("🩺 Symtrack API running on {}", config.addr);
    println!("  POST /patterns - Analyze entries");
    println!("  POST /summary  - Dashboard summary");
    println!("  GET  /health   - Health check");
    axum::serve(listener, router).await?;
    Ok(())
}
