//! Central module for organizing the application's API endpoints.
//!
//! This module acts as a top-level container for the API domains (user
//! registration and profiles) and assembles them, together with the
//! authentication routes, into the application router.

pub mod common;
pub mod profile;
pub mod users;

use crate::auth;
use crate::config::Config;
use axum::{Extension, Router, response::Json, routing::get};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Builds the full application router with shared state attached.
pub fn app_router(pool: SqlitePool, config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/users", users::routes::users_router())
        .nest("/api/auth", auth::routes::auth_router())
        .nest("/api/profile", profile::routes::profile_router())
        .layer(Extension(pool))
        .layer(Extension(config))
}

async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "devlink",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
