//! Handler functions for authentication-related API endpoints.
//!
//! These functions process login requests and return the authenticated
//! user, delegating to `CredentialService` for the business logic.

use crate::api::common::{ApiError, TokenResponse, ValidJson, service_error_to_http};
use crate::config::Config;
use crate::database::models::{LoginUser, User};
use crate::services::credential_service::CredentialService;
use crate::utils::jwt::Claims;
use axum::extract::{Extension, Json};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Arc<Config>>,
    ValidJson(payload): ValidJson<LoginUser>,
) -> Result<Json<TokenResponse>, ApiError> {
    let service = CredentialService::new(&pool, &config);
    match service.authenticate(payload).await {
        Ok(token) => Ok(Json(TokenResponse { token })),
        Err(error) => Err(service_error_to_http(error)),
    }
}

/// Get current user information from token
#[axum::debug_handler]
pub async fn me(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Arc<Config>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<User>, ApiError> {
    let service = CredentialService::new(&pool, &config);
    service
        .current_user(claims.user_id())
        .await
        .map(Json)
        .map_err(service_error_to_http)
}
