//! Configuration file support for the diagnosis tool.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/diagnose/config.toml`.

use crate::{Disease, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub models: ModelsConfig,
}

/// Location of the three model artifacts
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelsConfig {
    #[serde(default = "default_models_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_heart_file")]
    pub heart: PathBuf,

    #[serde(default = "default_diabetes_file")]
    pub diabetes: PathBuf,

    #[serde(default = "default_parkinsons_file")]
    pub parkinsons: PathBuf,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            dir: default_models_dir(),
            heart: default_heart_file(),
            diabetes: default_diabetes_file(),
            parkinsons: default_parkinsons_file(),
        }
    }
}

impl ModelsConfig {
    /// Artifact path for a disease; absolute file entries ignore `dir`
    ///
    /// A leading `~` in either `dir` or the file entry expands to the home
    /// directory.
    pub fn path_for(&self, disease: Disease) -> Result<PathBuf> {
        let file = match disease {
            Disease::Heart => &self.heart,
            Disease::Diabetes => &self.diabetes,
            Disease::Parkinsons => &self.parkinsons,
        };
        Ok(expand_home(&self.dir)?.join(expand_home(file)?))
    }
}

/// Replace a leading `~` component with the user's home directory
fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let home = dirs::home_dir().ok_or_else(|| {
                Error::Config(format!("Cannot expand {:?}: home directory unknown", path))
            })?;
            Ok(home.join(rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

// Default value functions
fn default_models_dir() -> PathBuf {
    // "~" is resolved by path_for, which reports a missing home directory
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("~/.local/share"));
    base.join("diagnose").join("models")
}

fn default_heart_file() -> PathBuf {
    PathBuf::from("heartdisease.json")
}

fn default_diabetes_file() -> PathBuf {
    PathBuf::from("diabetes.json")
}

fn default_parkinsons_file() -> PathBuf {
    PathBuf::from("parkinson.json")
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            config_path => {
                tracing::info!("No config file found at {:?}, using defaults", config_path);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("diagnose").join("config.toml"))
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.models.dir.ends_with("diagnose/models"));
        assert_eq!(
            config.models.path_for(Disease::Heart).unwrap(),
            config.models.dir.join("heartdisease.json")
        );
        assert_eq!(
            config.models.path_for(Disease::Parkinsons).unwrap(),
            config.models.dir.join("parkinson.json")
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[models]
dir = "/opt/models"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.models.path_for(Disease::Diabetes).unwrap(),
            PathBuf::from("/opt/models/diabetes.json")
        );
    }

    #[test]
    fn test_absolute_file_overrides_dir() {
        let toml_str = r#"
[models]
dir = "/opt/models"
heart = "/srv/heart-v2.json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.models.path_for(Disease::Heart).unwrap(),
            PathBuf::from("/srv/heart-v2.json")
        );
    }

    #[test]
    fn test_tilde_dir_expands_to_home() {
        let toml_str = r#"
[models]
dir = "~/.local/share/diagnose/models"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let home = dirs::home_dir().expect("home directory");
        assert_eq!(
            config.models.path_for(Disease::Heart).unwrap(),
            home.join(".local/share/diagnose/models/heartdisease.json")
        );
    }

    #[test]
    fn test_expand_home_only_touches_leading_tilde() {
        let home = dirs::home_dir().expect("home directory");
        assert_eq!(expand_home(Path::new("~")).unwrap(), home.join(""));
        assert_eq!(
            expand_home(Path::new("/opt/~/models")).unwrap(),
            PathBuf::from("/opt/~/models")
        );
        assert_eq!(
            expand_home(Path::new("~models")).unwrap(),
            PathBuf::from("~models")
        );
    }

    #[test]
    fn test_default_models_dir_is_absolute() {
        let config = Config::default();
        let path = config.models.path_for(Disease::Diabetes).unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("diagnose/models/diabetes.json"));
    }

    #[test]
    fn test_save_and_load_from() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("diagnose").join("config.toml");

        let mut config = Config::default();
        config.models.dir = temp_dir.path().join("models");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.models.dir, config.models.dir);
        assert_eq!(loaded.models.heart, config.models.heart);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[models\ndir = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
