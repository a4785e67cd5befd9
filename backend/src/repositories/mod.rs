//! Data access layer.
//!
//! Each repository wraps the SQL for one table and returns `anyhow::Result`
//! so that services can lift storage failures into `ServiceError::Database`.

pub mod profile_repository;
pub mod user_repository;
