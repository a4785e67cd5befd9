//! Defines the HTTP routes for profiles.

use super::handlers::{get_my_profile, get_profile_by_user_id, upsert_profile};
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn profile_router() -> Router {
    Router::new()
        .route(
            "/",
            post(upsert_profile).layer(middleware::from_fn(jwt_auth)),
        )
        .route(
            "/me",
            get(get_my_profile).layer(middleware::from_fn(jwt_auth)),
        )
        .route("/user/{user_id}", get(get_profile_by_user_id))
}
