//! Carryover Core - shared error types and configuration
//!
//! This crate provides the error taxonomy and the configuration layer used by
//! the commit message parser and the command-line front-end.

pub mod config;
pub mod error;

pub use config::{Config, MessageConfig, OutputConfig};
pub use error::{CarryoverError, ConfigError, MessageError, Result};
