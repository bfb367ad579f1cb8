use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::CountDto,
    server::{error::AppError, service::clan::ClanService, state::AppState},
};

/// Count stored clans.
///
/// # Returns
/// - `200 OK` - `{ "count": n }`
/// - `500 Internal Server Error` - Database error
pub async fn get_clan_count(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ClanService::new(&state.db);

    let count = service.count().await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Get a stored clan and its member ids.
///
/// The id is taken as a raw path segment so that a non-numeric id answers with the
/// API's own error body.
///
/// # Returns
/// - `200 OK` - Clan with member ids in ascending order
/// - `400 Bad Request` - `clan_id` is not an integer
/// - `404 Not Found` - No clan stored with that id
/// - `500 Internal Server Error` - Database error
pub async fn get_clan_by_id(
    State(state): State<AppState>,
    Path(clan_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let clan_id: u64 = clan_id
        .parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid clan id '{}'", clan_id)))?;

    let service = ClanService::new(&state.db);

    match service.get_by_id(clan_id).await? {
        Some(clan) => Ok((StatusCode::OK, Json(clan.into_dto()))),
        None => Err(AppError::NotFound(format!("Clan {} not found", clan_id))),
    }
}
