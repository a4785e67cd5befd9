//! Authentication module for user login, token checks and the current user.
//!
//! This module provides the login endpoint, the endpoint returning the
//! authenticated user, and the middleware that guards private routes.

pub mod handlers;
pub mod middleware;
pub mod routes;
