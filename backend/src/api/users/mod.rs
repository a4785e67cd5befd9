//! Module for user registration API endpoints.

pub mod handlers;
pub mod routes;
