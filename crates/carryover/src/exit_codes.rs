//! Exit codes for the CLI

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Input could not be read
pub const INPUT_ERROR: i32 = 3;

/// Lines were dropped while `--strict` was set
pub const DIAGNOSTICS: i32 = 4;
