//! # heatdash-server
//!
//! HTTP API over the processed heatdash tables: raw canonical rows for the
//! charting front end plus the aggregated trend, ranking and comparison
//! views. Every request reloads and re-aggregates, so a fresh conversion
//! run is visible immediately and concurrent requests share no mutable
//! state.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use heatdash_agg::{RankedSeries, TimeSeries};
use heatdash_table::Row;
use heatdash_views::{
    cases_trend, deaths_trend, icd_versions, top_conditions, DataStore, DeathsTrend, ViewError,
    ALL_VERSIONS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Shared request state: just the processed-data directory.
#[derive(Clone)]
struct AppState {
    store: DataStore,
}

/// Health check response.
#[derive(Serialize, Deserialize)]
pub struct Health {
    /// Server status ("ok" when healthy).
    pub status: String,
    /// Server version from Cargo.toml.
    pub version: String,
}

/// JSON error body for failed requests.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(err: &ViewError) -> ApiError {
    let status = if err.is_missing_data() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

/// Health check endpoint handler.
async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Both tables as raw canonical rows, the shape the front end consumes.
#[derive(Serialize)]
struct DataPayload {
    cases: Vec<Row>,
    deaths: Vec<Row>,
}

async fn data(State(state): State<AppState>) -> Result<Json<DataPayload>, ApiError> {
    let cases = state.store.load_cases().map_err(|e| api_error(&e))?;
    let deaths = state.store.load_deaths().map_err(|e| api_error(&e))?;
    Ok(Json(DataPayload {
        cases: cases.rows().to_vec(),
        deaths: deaths.rows().to_vec(),
    }))
}

async fn versions(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let cases = state.store.load_cases().map_err(|e| api_error(&e))?;
    Ok(Json(icd_versions(&cases)))
}

fn default_icd() -> String {
    ALL_VERSIONS.to_string()
}

#[derive(Deserialize)]
struct TrendParams {
    #[serde(default = "default_icd")]
    icd: String,
}

async fn trend(
    State(state): State<AppState>,
    Query(params): Query<TrendParams>,
) -> Result<Json<TimeSeries>, ApiError> {
    let cases = state.store.load_cases().map_err(|e| api_error(&e))?;
    Ok(Json(cases_trend(&cases, &params.icd)))
}

fn default_top_n() -> usize {
    10
}

#[derive(Deserialize)]
struct RankParams {
    #[serde(default = "default_icd")]
    icd: String,
    #[serde(default = "default_top_n")]
    n: usize,
}

async fn top(
    State(state): State<AppState>,
    Query(params): Query<RankParams>,
) -> Result<Json<RankedSeries>, ApiError> {
    let cases = state.store.load_cases().map_err(|e| api_error(&e))?;
    Ok(Json(top_conditions(&cases, &params.icd, params.n.max(1))))
}

async fn deaths(State(state): State<AppState>) -> Result<Json<DeathsTrend>, ApiError> {
    let deaths = state.store.load_deaths().map_err(|e| api_error(&e))?;
    Ok(Json(deaths_trend(&deaths)))
}

/// Create the application router.
///
/// This is separated from `main()` to allow testing. Static assets are
/// served from `assets_dir` when one is configured.
fn create_router(state: AppState, assets_dir: Option<PathBuf>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/data", get(data))
        .route("/api/versions", get(versions))
        .route("/api/cases_trend", get(trend))
        .route("/api/top_conditions", get(top))
        .route("/api/deaths_trend", get(deaths))
        .with_state(state);

    if let Some(dir) = assets_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_dir = std::env::var("HEATDASH_DATA_DIR").unwrap_or_else(|_| "data_processed".into());
    let assets_dir = std::env::var("HEATDASH_PUBLIC_DIR").ok().map(PathBuf::from);
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let state = AppState {
        store: DataStore::new(data_dir),
    };
    let app = create_router(state, assets_dir);

    let addr = format!("0.0.0.0:{port}");
    println!("heatdash-server listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
