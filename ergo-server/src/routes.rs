use crate::error::ApiError;
use crate::shell::SHELL_HTML;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::{header, HeaderValue};
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use ergo_core::sample::SampleRow;
use ergo_core::{select_video, Dashboard, VideoCatalog, VideoEntry, VideoPanel};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

pub fn dashboard_router(state: SharedState) -> Router {
    let mut router = Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route("/api/dashboard", get(handle_dashboard))
        .route("/api/samples", get(handle_samples))
        .route("/api/videos", get(handle_videos))
        .route("/api/videos/:index", get(handle_select_video))
        .nest_service("/videos", ServeDir::new(&state.videos_dir))
        .nest_service("/ui", ServeDir::new(&state.ui_dir))
        .layer(TraceLayer::new_for_http());

    if state.debug {
        router = router.layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));
    }

    router.with_state(state)
}

pub async fn handle_index(State(state): State<SharedState>) -> Response {
    let path = state.ui_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Html(SHELL_HTML).into_response(),
        Err(source) => ApiError::Asset {
            path: path.display().to_string(),
            source,
        }
        .into_reply(state.debug),
    }
}

pub async fn handle_health(State(state): State<SharedState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "ergo-dash",
        "rows": state.table.len(),
        "videos": state.catalog.len(),
    }))
}

pub async fn handle_dashboard(State(state): State<SharedState>) -> Json<Dashboard> {
    Json(state.dashboard.clone())
}

pub async fn handle_samples(State(state): State<SharedState>) -> Json<Vec<SampleRow>> {
    Json(state.table.rows().to_vec())
}

pub async fn handle_videos(State(state): State<SharedState>) -> Json<Vec<VideoEntry>> {
    Json(state.catalog.entries().to_vec())
}

pub async fn handle_select_video(
    State(state): State<SharedState>,
    Path(raw): Path<String>,
) -> Json<VideoPanel> {
    Json(selection_for(&state.catalog, &raw))
}

/// Non-numeric and out-of-range identifiers both take the fallback path.
pub fn selection_for(catalog: &VideoCatalog, raw: &str) -> VideoPanel {
    let index = raw.trim().parse::<usize>().unwrap_or(usize::MAX);
    let panel = select_video(catalog, index);
    if panel.fallback {
        debug!("unknown video selection '{raw}', falling back to first entry");
    }
    panel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_selection() {
        let catalog = VideoCatalog::sample().expect("catalog");
        assert_eq!(selection_for(&catalog, "2").index, Some(2));
        assert_eq!(selection_for(&catalog, " 1 ").index, Some(1));
    }

    #[test]
    fn garbage_selection_falls_back() {
        let catalog = VideoCatalog::sample().expect("catalog");
        for raw in ["abc", "-1", "", "3", "18446744073709551616"] {
            let panel = selection_for(&catalog, raw);
            assert_eq!(panel.index, Some(0), "{raw}");
            assert!(panel.fallback, "{raw}");
        }
    }
}
