//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use carryover_core::config::defaults::{
    default_config_toml, default_config_yaml, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
};

use crate::cli::{output, Cli};

/// Write a default configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Write TOML instead of YAML
    #[arg(long)]
    pub toml: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(force = self.force, toml = self.toml, "executing init command");
        let cwd = std::env::current_dir()?;
        let default_name = if self.toml {
            DEFAULT_CONFIG_TOML
        } else {
            DEFAULT_CONFIG_YAML
        };
        let config_path = self.output.clone().unwrap_or_else(|| cwd.join(default_name));

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {}. Use --force to overwrite.",
                config_path.display()
            );
        }

        let content = if self.toml {
            default_config_toml()
        } else {
            default_config_yaml()
        };
        std::fs::write(&config_path, content)?;

        if !cli.quiet {
            output::success(&format!(
                "Configuration written to {}",
                style(config_path.display()).cyan()
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("carryover.toml");
        let cli = Cli::try_parse_from([
            "carryover",
            "--quiet",
            "init",
            "--toml",
            "--output",
            path.to_str().unwrap(),
        ])
        .unwrap();

        cli.execute().unwrap();
        let config = carryover_core::config::load_config(&path).unwrap();
        assert_eq!(config.message.comment_prefix, "#");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("carryover.yaml");
        std::fs::write(&path, "output:\n  format: json\n").unwrap();

        let cmd = InitCommand {
            force: false,
            toml: false,
            output: Some(path.clone()),
        };
        let cli = Cli::try_parse_from(["carryover", "--quiet", "init"]).unwrap();
        assert!(cmd.execute(&cli).is_err());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "output:\n  format: json\n"
        );
    }
}
