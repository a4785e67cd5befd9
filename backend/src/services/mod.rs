//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between the HTTP layer and the repositories,
//! such as registering users or maintaining their profiles.

pub mod credential_service;
pub mod profile_service;
