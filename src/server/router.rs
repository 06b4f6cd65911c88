use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::server::{
    controller::{
        admin::{ban_user, generate_id, initialize},
        present::{list_presents, receive_presents},
        system::health,
        user::{create_user, list_items, login, logout},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/admin/generate", get(generate_id))
        .route("/initialize", post(initialize))
        .route("/admin/user/{user_id}/ban", post(ban_user))
        .route("/user", post(create_user))
        .route("/login", post(login))
        .route("/user/{user_id}/logout", delete(logout))
        .route("/user/{user_id}/item", get(list_items))
        .route("/user/{user_id}/present/index/{n}", get(list_presents))
        .route("/user/{user_id}/present/receive", post(receive_presents))
}
