use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagex.config.json";

/// How `export` packages the bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    /// Single `landing-page.zip`
    #[default]
    Zip,
    /// Loose `index.html` and `style.css`
    Dir,
}

/// Pagex configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the persisted page
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,

    /// Export destination
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    #[serde(default)]
    pub archive: ArchiveFormat,
}

fn default_storage_dir() -> String {
    ".pagex".to_string()
}

fn default_out_dir() -> String {
    "dist".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the storage directory
    pub fn get_storage_dir(&self, cwd: &str) -> PathBuf {
        resolve(cwd, &self.storage_dir)
    }

    /// Get absolute path to the export directory
    pub fn get_out_dir(&self, cwd: &str) -> PathBuf {
        resolve(cwd, &self.out_dir)
    }
}

fn resolve(cwd: &str, dir: &str) -> PathBuf {
    let dir = Path::new(dir);
    if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        PathBuf::from(cwd).join(dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            out_dir: default_out_dir(),
            archive: ArchiveFormat::Zip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "storageDir": "state",
            "outDir": "public",
            "archive": "dir"
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.storage_dir, "state");
        assert_eq!(config.out_dir, "public");
        assert_eq!(config.archive, ArchiveFormat::Dir);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "outDir": "site" }"#).unwrap();
        assert_eq!(config.storage_dir, ".pagex");
        assert_eq!(config.out_dir, "site");
        assert_eq!(config.archive, ArchiveFormat::Zip);
    }

    #[test]
    fn test_unknown_archive_format_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{ "archive": "tar" }"#).is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage_dir, ".pagex");
        assert_eq!(config.out_dir, "dist");
        assert_eq!(config.archive, ArchiveFormat::Zip);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();

        assert_eq!(Config::load(&cwd).unwrap(), Config::default());
        assert_eq!(Config::default().get_out_dir(&cwd), dir.path().join("dist"));
    }
}
