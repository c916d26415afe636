use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Rules to run, by name. Empty means the whole catalogue; the
    /// catalogue's declaration order is kept either way.
    #[serde(default)]
    pub enabled_rules: Vec<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_rules: Vec<String>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".grammarchk.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if !cli_rules.is_empty() {
            config.enabled_rules = cli_rules;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if !other.enabled_rules.is_empty() {
            self.enabled_rules = other.enabled_rules;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "grammarchk").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_runs_every_rule() {
        let config = Config::default();
        assert!(config.enabled_rules.is_empty());
    }

    #[test]
    fn merge_prefers_non_empty_rule_list() {
        let base = Config::default();
        let override_config = Config {
            enabled_rules: vec!["common_typos".to_string()],
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.enabled_rules, vec!["common_typos"]);
    }

    #[test]
    fn merge_keeps_existing_rules_when_other_is_empty() {
        let base = Config {
            enabled_rules: vec!["its_its".to_string()],
        };
        let merged = base.merge(Config::default());
        assert_eq!(merged.enabled_rules, vec!["its_its"]);
    }

    #[test]
    fn parses_toml_rule_list() {
        let config: Config = toml::from_str("enabled_rules = [\"your_youre\"]").unwrap();
        assert_eq!(config.enabled_rules, vec!["your_youre"]);
    }
}
