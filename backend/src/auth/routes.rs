//! Defines the HTTP routes specifically for authentication.
//!
//! These are designed to be nested under `/api/auth` in the main Axum router.

use crate::auth::handlers::*;
use crate::auth::middleware::*;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Creates the authentication router with all auth-related routes
pub fn auth_router() -> Router {
    Router::new()
        .route("/", post(login))
        .route("/", get(me).layer(middleware::from_fn(jwt_auth)))
}
