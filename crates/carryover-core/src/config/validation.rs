//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Output formats understood by the front-end
pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_message(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_message(config: &Config) -> Result<()> {
    if config.message.comment_prefix.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "message.comment_prefix".to_string(),
            message: "comment prefix cannot be empty".to_string(),
        }
        .into());
    }

    let sentinel = &config.message.no_tests_sentinel;
    if sentinel.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "message.no_tests_sentinel".to_string(),
            message: "sentinel cannot be empty".to_string(),
        }
        .into());
    }

    // Lines are right-trimmed and indented lines belong to the tests body,
    // so a padded sentinel could never match.
    if sentinel.trim() != sentinel {
        return Err(ConfigError::InvalidValue {
            field: "message.no_tests_sentinel".to_string(),
            message: "sentinel cannot start or end with whitespace".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    if !OUTPUT_FORMATS.contains(&config.output.format.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "output.format".to_string(),
            message: format!("must be one of: {}", OUTPUT_FORMATS.join(", ")),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_comment_prefix() {
        let mut config = Config::default();
        config.message.comment_prefix = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_padded_sentinel() {
        let mut config = Config::default();
        config.message.no_tests_sentinel = "  No new tests.".to_string();
        assert!(validate_config(&config).is_err());

        config.message.no_tests_sentinel = "   ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_invalid_output_format() {
        let mut config = Config::default();
        config.output.format = "yaml".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("output.format"));
    }
}
