use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use rolodex_common::error::RolodexError;
use rolodex_search::parse;

use crate::error::ApiError;
use crate::AppState;

/// Index a person document. The body is parsed with the same lenient
/// extraction used for search hits, so absent fields become empty strings,
/// while a body that is not JSON at all is rejected.
pub async fn index_person(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let person = parse::person(&body)
        .map_err(|e| RolodexError::Validation(format!("invalid person payload: {e}")))?;

    state.client.index(&person).await?;
    Ok(StatusCode::OK)
}
