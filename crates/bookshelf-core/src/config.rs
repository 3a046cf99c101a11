//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/bookshelf/config.toml)
//! 3. Environment variables (BOOKSHELF_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix
const ENV_PREFIX: &str = "BOOKSHELF";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the catalog file
    #[serde(default = "default_library_path")]
    pub library_path: PathBuf,

    /// Interface language tag ("ru" or "en")
    #[serde(default = "default_language")]
    pub language: String,

    /// Log file used when BOOKSHELF_LOG is set
    ///
    /// Defaults to the catalog path with a `.log` extension.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_path: default_library_path(),
            language: default_language(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (BOOKSHELF_LIBRARY_PATH, BOOKSHELF_LANGUAGE)
    /// 2. Config file (~/.config/bookshelf/config.toml or BOOKSHELF_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // BOOKSHELF_LIBRARY_PATH
        if let Ok(val) = std::env::var(format!("{}_LIBRARY_PATH", ENV_PREFIX)) {
            self.library_path = PathBuf::from(val);
        }

        // BOOKSHELF_LANGUAGE
        if let Ok(val) = std::env::var(format!("{}_LANGUAGE", ENV_PREFIX)) {
            self.language = val;
        }
    }

    /// Get the config file path
    ///
    /// Can be overridden with BOOKSHELF_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bookshelf")
            .join("config.toml")
    }
}

/// Get the default catalog file path
///
/// Relative to the working directory, the way the program has always
/// stored its catalog.
fn default_library_path() -> PathBuf {
    PathBuf::from("library.json")
}

/// Get the default interface language
fn default_language() -> String {
    "ru".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap();
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            // Clear all the vars
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &[
        "BOOKSHELF_LIBRARY_PATH",
        "BOOKSHELF_LANGUAGE",
        "BOOKSHELF_CONFIG",
    ];

    #[test]
    fn test_default_config() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config::default();
        assert_eq!(config.library_path, PathBuf::from("library.json"));
        assert_eq!(config.language, "ru");
    }

    #[test]
    fn test_env_override_library_path() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("BOOKSHELF_LIBRARY_PATH", "/tmp/bookshelf-test.json");
        config.apply_env_overrides();

        assert_eq!(
            config.library_path,
            PathBuf::from("/tmp/bookshelf-test.json")
        );
    }

    #[test]
    fn test_env_override_language() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("BOOKSHELF_LANGUAGE", "en");
        config.apply_env_overrides();

        assert_eq!(config.language, "en");
    }

    #[test]
    fn test_serialization() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            library_path: PathBuf::from("/data/library.json"),
            language: "en".to_string(),
            log_file: None,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("library_path"));
        assert!(toml_str.contains("language"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.library_path, config.library_path);
        assert_eq!(parsed.language, config.language);
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            library_path = "/custom/library.json"
            language = "en"
            log_file = "/var/log/bookshelf.log"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.library_path, PathBuf::from("/custom/library.json"));
        assert_eq!(config.language, "en");
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/bookshelf.log")));
    }

    #[test]
    fn test_load_from_str_fills_in_defaults() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.library_path, PathBuf::from("library.json"));
        assert_eq!(config.language, "ru");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        // Should return defaults when file doesn't exist
        assert_eq!(config.library_path, PathBuf::from("library.json"));
        assert_eq!(config.language, "ru");
    }

    #[test]
    fn test_config_file_path_env_override() {
        let _guard = EnvGuard::new(ENV_VARS);

        env::set_var("BOOKSHELF_CONFIG", "/etc/bookshelf.toml");
        assert_eq!(
            Config::config_file_path(),
            PathBuf::from("/etc/bookshelf.toml")
        );
    }
}
