use eyre::{Context, Result};
use promptr::tags::TagSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub templates: TemplatesConfig,
    pub tags: TagSchema,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory of .md template files; builtins are used when absent
    pub dir: PathBuf,
    /// Template name used when a command gives none
    pub default: String,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("promptr")
                .join("templates"),
            default: "reasoning".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub completions_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            completions_path: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("promptr")
                .join("completions.jsonl"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            templates: TemplatesConfig::default(),
            tags: TagSchema::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.templates.default, "reasoning");
        assert_eq!(config.tags, TagSchema::default());
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("promptr.yml");
        fs::write(
            &path,
            "templates:\n  default: custom\ntags:\n  answer_open: '[FINAL]'\n  answer_close: '[/FINAL]'\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.templates.default, "custom");
        assert_eq!(config.tags.answer_open, "[FINAL]");
        // Unspecified fields keep their defaults
        assert_eq!(config.tags.think_open, "<think>");
    }

    #[test]
    fn test_load_explicit_config_missing() {
        let path = PathBuf::from("/nonexistent/promptr.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("promptr.yml");
        fs::write(&path, "templates: [not a mapping").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}
