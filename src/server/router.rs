use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::{
        clan::{get_clan_by_id, get_clan_count},
        player::{get_player_by_name, get_player_count},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/player/count", get(get_player_count))
        .route("/player/{name}", get(get_player_by_name))
        .route("/clan/count", get(get_clan_count))
        .route("/clan/{clan_id}", get(get_clan_by_id))
        .layer(CorsLayer::permissive())
}
