//! Handler functions for profile API endpoints.
//!
//! These functions read the authenticated user id from the token claims and
//! delegate to `ProfileService`.

use crate::api::common::{ApiError, ValidJson, service_error_to_http};
use crate::database::models::{Profile, ProfileFields};
use crate::services::profile_service::ProfileService;
use crate::utils::jwt::Claims;
use axum::extract::{Extension, Json, Path};
use sqlx::SqlitePool;

/// Returns the authenticated user's profile.
#[axum::debug_handler]
pub async fn get_my_profile(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Profile>, ApiError> {
    let service = ProfileService::new(&pool);
    service
        .get_own_profile(claims.user_id())
        .await
        .map(Json)
        .map_err(service_error_to_http)
}

/// Creates or updates the authenticated user's profile.
#[axum::debug_handler]
pub async fn upsert_profile(
    Extension(pool): Extension<SqlitePool>,
    Extension(claims): Extension<Claims>,
    ValidJson(payload): ValidJson<ProfileFields>,
) -> Result<Json<Profile>, ApiError> {
    let service = ProfileService::new(&pool);
    service
        .upsert_profile(claims.user_id(), payload)
        .await
        .map(Json)
        .map_err(service_error_to_http)
}

/// Returns the profile of any user.
#[axum::debug_handler]
pub async fn get_profile_by_user_id(
    Extension(pool): Extension<SqlitePool>,
    Path(user_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let service = ProfileService::new(&pool);
    service
        .get_profile_by_user_id(&user_id)
        .await
        .map(Json)
        .map_err(service_error_to_http)
}
