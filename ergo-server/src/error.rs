use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to read {path}: {source}")]
    Asset {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Full message in debug mode, generic text otherwise.
    pub fn into_reply(self, verbose: bool) -> Response {
        tracing::error!("{self}");
        let message = if verbose {
            self.to_string()
        } else {
            "internal server error".to_string()
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_reply(false)
    }
}
