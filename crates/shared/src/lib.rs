//! Shared errors and configuration for Moneta.
//!
//! This crate provides the pieces every other crate depends on:
//! - Application-wide error types
//! - Configuration management (codec, custom currencies, logging)

pub mod config;
pub mod error;

pub use config::{AppConfig, CodecConfig, CurrencyConfig, LogConfig};
pub use error::{AppError, AppResult};
