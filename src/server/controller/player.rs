use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::CountDto,
    server::{error::AppError, service::player::PlayerService, state::AppState},
};

/// Count stored players.
///
/// # Returns
/// - `200 OK` - `{ "count": n }`
/// - `500 Internal Server Error` - Database error
pub async fn get_player_count(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    let count = service.count().await?;

    Ok((StatusCode::OK, Json(CountDto { count })))
}

/// Get a player and their clan history by account name.
///
/// An exact, case-sensitive match is preferred; otherwise the name is matched
/// case-insensitively.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `name` - Account name to look up
///
/// # Returns
/// - `200 OK` - Player with history, timestamps as Unix seconds
/// - `404 Not Found` - No player matches the name
/// - `500 Internal Server Error` - Database error
pub async fn get_player_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PlayerService::new(&state.db);

    match service.get_by_name(&name).await? {
        Some(player) => Ok((StatusCode::OK, Json(player.into_dto()))),
        None => Err(AppError::NotFound(format!("Player '{}' not found", name))),
    }
}
