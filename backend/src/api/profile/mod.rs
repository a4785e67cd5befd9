//! Module for profile API endpoints.
//!
//! This module handles reading the caller's profile, reading any user's
//! profile, and creating or updating the caller's profile.

pub mod handlers;
pub mod routes;
