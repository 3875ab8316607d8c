use axum::extract::{Query, State};
use axum::Json;

use crate::error::ApiError;
use crate::AppState;

use super::requests::SearchParams;
use super::responses::PersonPayload;

/// Run the person query against the backend and re-emit the hits as a
/// JSON array, preserving backend relevance order.
pub async fn search_persons(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<PersonPayload>>, ApiError> {
    let response = state.client.search("search", &params.q).await?;
    let data: Vec<PersonPayload> = response
        .hits
        .into_iter()
        .map(|hit| hit.person.into())
        .collect();
    Ok(Json(data))
}
