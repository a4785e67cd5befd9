//! Error handling utilities for API responses.
//!
//! Converts service-layer errors into HTTP responses. Client errors come in
//! two shapes:
//! - `{ "errors": [{ "msg", "param" }] }` for rejected input, duplicate users
//!   and bad credentials
//! - `{ "msg" }` for missing resources and failed authentication
//!
//! Request bodies that cannot be read as JSON use the first shape too.
//!
//! Server errors always render as `{ "msg": "Server Error" }`; the cause is
//! logged and never returned.

use crate::errors::{FieldError, ServiceError};
use axum::{
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use validator::Validate;

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<Value>);

/// Itemized error body.
#[derive(Debug, Serialize)]
pub struct ErrorList {
    pub errors: Vec<FieldError>,
}

/// Single message body.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub msg: String,
}

/// Body returned after registration or login.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

fn error_list(status: StatusCode, errors: Vec<FieldError>) -> ApiError {
    (status, Json(json!(ErrorList { errors })))
}

fn error_message(status: StatusCode, msg: impl Into<String>) -> ApiError {
    (status, Json(json!(ErrorMessage { msg: msg.into() })))
}

/// Converts ServiceError to the matching HTTP status and body
pub fn service_error_to_http(error: ServiceError) -> ApiError {
    match error {
        ServiceError::Validation { errors } => error_list(StatusCode::BAD_REQUEST, errors),
        ServiceError::AlreadyExists { entity, .. } => error_list(
            StatusCode::BAD_REQUEST,
            vec![FieldError::new(format!("{} already exists", entity))],
        ),
        ServiceError::InvalidCredentials => error_list(
            StatusCode::BAD_REQUEST,
            vec![FieldError::new("Invalid Credentials")],
        ),
        ServiceError::NotFound { entity, .. } if entity == "Profile" => {
            error_message(StatusCode::BAD_REQUEST, "There is no profile for this user")
        }
        ServiceError::NotFound { entity, .. } => {
            error_message(StatusCode::BAD_REQUEST, format!("{} not found", entity))
        }
        ServiceError::Unauthorized { message } => {
            tracing::debug!("Rejected token: {}", message);
            error_message(StatusCode::UNAUTHORIZED, "Token is not valid")
        }
        ServiceError::Database { source } => {
            tracing::error!("Database error: {:#}", source);
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
        }
        ServiceError::InternalError { message } => {
            tracing::error!("Internal error: {}", message);
            error_message(StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
        }
    }
}

/// Response for a request that carries no token at all.
pub fn missing_token_response() -> ApiError {
    error_message(StatusCode::UNAUTHORIZED, "No token, authorization denied")
}

/// Runs the payload's validation rules, rendering failures as a 400.
pub fn validate_request<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|errors| service_error_to_http(errors.into()))
}

/// Renders an unreadable JSON body as an itemized 400.
fn json_rejection_to_http(rejection: JsonRejection) -> ApiError {
    tracing::debug!("Rejected request body: {}", rejection.body_text());
    service_error_to_http(ServiceError::Validation {
        errors: vec![FieldError::new(rejection.body_text())],
    })
}

/// JSON body extractor that also runs the payload's validation rules.
///
/// Malformed bodies, a missing content type and failed rules all come back
/// in the `{ "errors": [...] }` shape.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection_to_http)?;
        validate_request(&payload)?;
        Ok(Self(payload))
    }
}
