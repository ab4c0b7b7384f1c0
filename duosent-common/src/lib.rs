//! Duosent Common - Shared configuration, errors, and logging for the
//! duosent sentiment engine.
//!
//! This crate provides:
//! - Configuration types and loading
//! - The unified error type shared by both analyzers
//! - Logging setup with noise filtering

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    ClassifierConfig, Config, LexiconConfig, NetworkConfig, ObservabilityConfig, ReconcilerConfig,
};
pub use error::{AnalyzerKind, Error, Result};
pub use logging::init_logging;
