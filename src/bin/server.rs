use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use namescreen::{to_json_rows, Query, RankOptions, Record, ScreenError, Screener};

#[derive(Clone)]
struct AppState {
    screener: Arc<Screener<Record>>,
}

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
    #[serde(default)]
    aliases: Vec<String>,
    limit: Option<i64>,
    min_match: Option<f64>,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    results: Vec<Value>,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    candidates: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "namescreen_server=debug,namescreen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let candidates_path =
        std::env::var("CANDIDATES_PATH").unwrap_or_else(|_| "candidates.json".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8084);
    let options = match std::env::var("RANK_OPTIONS") {
        Ok(json) => RankOptions::from_json(&json)?,
        Err(_) => RankOptions::default(),
    };

    tracing::info!("Starting namescreen server");
    tracing::info!("Candidates: {}", candidates_path);
    tracing::info!("Port: {}", port);

    let pool = Record::load_list(&candidates_path)?
        .into_iter()
        .map(Record::into_candidate)
        .collect();

    let state = AppState {
        screener: Arc::new(Screener::new(pool, options)?),
    };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/search", post(search_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: namescreen::VERSION.to_string(),
        candidates: state.screener.len(),
    })
}

async fn search_handler(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    tracing::debug!("Search request: {:?}", req);

    let defaults = state.screener.options();
    let limit = match req.limit {
        Some(limit) => RankOptions::limit_from_signed(limit)?,
        None => defaults.limit,
    };
    let min_match = req.min_match.unwrap_or(defaults.min_match);
    let query = Query::new(&req.query, &req.aliases);

    let results = state
        .screener
        .clone()
        .search_async(query, limit, min_match)
        .await?;

    tracing::info!("{} -> {} matches", req.query, results.len());

    Ok(Json(SearchResponse {
        results: to_json_rows(&results),
    }))
}

// Error handling
struct AppError(ScreenError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ScreenError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.0.to_string();

        tracing::error!("Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<ScreenError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
