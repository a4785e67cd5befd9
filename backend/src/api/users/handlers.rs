//! Handler functions for user registration.
//!
//! Validates the registration payload and hands it to `CredentialService`,
//! returning only the signed token on success.

use crate::api::common::{ApiError, TokenResponse, ValidJson, service_error_to_http};
use crate::config::Config;
use crate::database::models::RegisterUser;
use crate::services::credential_service::CredentialService;
use axum::extract::{Extension, Json};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Registers a user and returns `{ "token": ... }`.
#[axum::debug_handler]
pub async fn register(
    Extension(pool): Extension<SqlitePool>,
    Extension(config): Extension<Arc<Config>>,
    ValidJson(payload): ValidJson<RegisterUser>,
) -> Result<Json<TokenResponse>, ApiError> {
    let service = CredentialService::new(&pool, &config);
    match service.register(payload).await {
        Ok(token) => Ok(Json(TokenResponse { token })),
        Err(error) => Err(service_error_to_http(error)),
    }
}
