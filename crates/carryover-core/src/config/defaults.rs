//! Default configuration values

use super::types::Config;

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "carryover.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "carryover.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".carryover.yaml";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".carryover.toml",
        ALT_CONFIG_FILE,
    ]
}

/// Generate default configuration YAML
pub fn default_config_yaml() -> String {
    let config = Config::default();
    serde_yaml::to_string(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TEMPLATE.to_string())
}

/// Generate default configuration TOML
pub fn default_config_toml() -> String {
    let config = Config::default();
    toml::to_string_pretty(&config).unwrap_or_else(|_| DEFAULT_CONFIG_TOML_TEMPLATE.to_string())
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# carryover configuration

message:
  comment_prefix: "#"
  no_tests_sentinel: "No new tests (OOPS!)."

output:
  format: text
"##;

/// Default configuration template (TOML)
pub const DEFAULT_CONFIG_TOML_TEMPLATE: &str = r##"# carryover configuration

[message]
comment_prefix = "#"
no_tests_sentinel = "No new tests (OOPS!)."

[output]
format = "text"
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_parse_to_defaults() {
        let from_yaml: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let from_toml: Config = toml::from_str(DEFAULT_CONFIG_TOML_TEMPLATE).unwrap();
        let defaults = Config::default();

        assert_eq!(from_yaml.message, defaults.message);
        assert_eq!(from_toml.message, defaults.message);
        assert_eq!(from_toml.output.format, "text");
        assert_eq!(from_yaml.message.comment_prefix, "#");
        assert_eq!(from_toml.message.comment_prefix, "#");
    }

    #[test]
    fn test_generated_yaml_round_trips() {
        let config: Config = serde_yaml::from_str(&default_config_yaml()).unwrap();
        assert_eq!(config.message.comment_prefix, "#");
    }
}
