//! Middleware for protecting authenticated routes.
//!
//! Validates the bearer token and attaches its claims to the request so that
//! handlers can read the authenticated user id.

use crate::api::common::{ApiError, missing_token_response, service_error_to_http};
use crate::config::Config;
use crate::errors::ServiceError;
use crate::utils::jwt::JwtUtils;
use axum::{
    extract::Request,
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Alternative header carrying the raw token.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// JWT authentication middleware
pub async fn jwt_auth(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let token = extract_token(request.headers()).ok_or_else(missing_token_response)?;

    let config = request
        .extensions()
        .get::<Arc<Config>>()
        .cloned()
        .ok_or_else(|| {
            service_error_to_http(ServiceError::internal_error(
                "Config extension missing from request",
            ))
        })?;

    let claims = JwtUtils::from_config(&config)
        .validate_token(&token)
        .map_err(service_error_to_http)?;

    // Add claims to request extensions for use in handlers
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Reads the token from `Authorization: Bearer <token>` or `x-auth-token`.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(auth_header) = headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
    {
        if let Some(token) = auth_header.strip_prefix("Bearer ") {
            return Some(token.trim().to_string()).filter(|token| !token.is_empty());
        }
    }

    headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|header| header.to_str().ok())
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
