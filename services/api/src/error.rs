use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rolodex_common::error::RolodexError;
use rolodex_search::SearchError;

pub struct ApiError(pub RolodexError);

impl From<RolodexError> for ApiError {
    fn from(err: RolodexError) -> Self {
        Self(err)
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        let mapped = match err {
            SearchError::Config(msg) => RolodexError::Config(msg),
            other => RolodexError::Upstream(other.to_string()),
        };
        Self(mapped)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RolodexError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            RolodexError::Upstream(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
