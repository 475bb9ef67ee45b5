//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::network::NetworkError;
use crate::pata::interleave;
use crate::planner::{RouteFinder, SearchRequest, SearchResult};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/norikae", get(norikae_page))
        .route("/api/route", get(api_route))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Interleaving demo page.
async fn index_page(Query(req): Query<PataRequest>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        pata: interleave(&req.a, &req.b),
        a: req.a,
        b: req.b,
    };
    render(&template)
}

/// Route search page.
///
/// Without both `fromsta` and `tosta` the page only shows the form and the
/// network.
async fn norikae_page(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Html<String>, AppError> {
    let lines = state.network.lines().await?;

    let result = req
        .stations()
        .map(|(from, to)| search(&state, &lines, from, to));

    let template = NorikaeTemplate::new(
        req.fromsta.clone().unwrap_or_default(),
        req.tosta.clone().unwrap_or_default(),
        &lines,
        result.as_ref(),
    );
    render(&template)
}

/// Route search as JSON.
async fn api_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let (from, to) = req.stations().ok_or_else(|| AppError::BadRequest {
        message: "both fromsta and tosta are required".to_string(),
    })?;

    let lines = state.network.lines().await?;
    let result = search(&state, &lines, from, to);

    Ok(Json(RouteResponse::from_result(from, to, &result)))
}

/// Build a fresh graph from `lines` and search it.
fn search(state: &AppState, lines: &[crate::domain::Line], from: &str, to: &str) -> SearchResult {
    let graph = state.graph_builder.build(lines);
    let result = RouteFinder::new(&graph).search(&SearchRequest::new(from, to));

    info!(
        from,
        to,
        found = result.is_found(),
        routes_explored = result.routes_explored,
        "Route search"
    );

    result
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template
        .render()
        .map(Html)
        .map_err(|e| AppError::Internal {
            message: format!("Template error: {}", e),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Upstream {
            message: format!("failed to load transit network: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
