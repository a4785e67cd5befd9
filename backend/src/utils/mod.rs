//! Collection of general utility functions.
//!
//! Small, reusable helpers that do not belong to a single domain module.

pub mod avatar;
pub mod jwt;
