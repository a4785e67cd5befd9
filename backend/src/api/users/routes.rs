//! Defines the HTTP routes for user registration.

use super::handlers::register;
use axum::{Router, routing::post};

pub fn users_router() -> Router {
    Router::new().route("/", post(register))
}
