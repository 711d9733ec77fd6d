//! HTTP API layer.
//!
//! This module provides:
//! - `ApiClient`: thin reqwest wrapper for the auth endpoints
//! - `ApiError`: typed error taxonomy for every failure the UI cares about

pub mod client;
pub mod error;

pub use client::{ApiClient, LoginResponse, UserProfile};
pub use error::ApiError;
