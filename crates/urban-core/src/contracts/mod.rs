//! Transport contract constants.
//!
//! This module contains string and numeric constants for API routes and
//! status codes shared across adapters. Keep these free of framework-specific
//! types to avoid dependency creep.

pub mod http;
