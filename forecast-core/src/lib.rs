//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The HTTP client for the forecast service
//! - Shared domain models and the display state they feed
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod state;

pub use client::{DEFAULT_ENDPOINT, ForecastClient, ForecastProvider, client_from_config};
pub use config::Config;
pub use error::FetchError;
pub use model::{Forecast, RawResponse};
pub use state::FetchState;
