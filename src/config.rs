//! User configuration.
//!
//! ```toml
//! # ~/.config/cubrid-dialect/config.toml
//! database_url = "cubrid://dba:@localhost:33000/demodb"
//! verbose = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DialectError, DialectResult};

/// Environment variable consulted before the config file.
pub const DATABASE_URL_ENV: &str = "CUBRID_DATABASE_URL";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database_url: Option<String>,
    pub verbose: bool,
}

impl Config {
    /// `<config_dir>/cubrid-dialect/config.toml`, when the platform has a
    /// config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cubrid-dialect").join("config.toml"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DialectResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| match e {
            DialectError::Config(msg) => {
                DialectError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Load from the default location.
    pub fn load() -> DialectResult<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> DialectResult<Self> {
        toml::from_str(content).map_err(|e| DialectError::Config(e.to_string()))
    }

    /// Pick the database URL: explicit value (flag or environment, already
    /// merged by the caller) over the config file.
    pub fn resolve_database_url(&self, explicit: Option<&str>) -> DialectResult<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.database_url.clone())
            .ok_or_else(|| {
                DialectError::Config(format!(
                    "No database URL provided. Use --database-url, set {} or add database_url to the config file",
                    DATABASE_URL_ENV
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = Config::parse(
            r#"
            database_url = "cubrid://dba:@localhost:33000/demodb"
            verbose = true
            "#,
        )
        .unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("cubrid://dba:@localhost:33000/demodb")
        );
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_config_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_bad_config_is_config_error() {
        assert!(matches!(
            Config::parse("verbose = \"loud\""),
            Err(DialectError::Config(_))
        ));
    }

    #[test]
    fn test_url_precedence() {
        let config = Config {
            database_url: Some("cubrid://file".to_string()),
            verbose: false,
        };
        assert_eq!(
            config.resolve_database_url(Some("cubrid://flag")).unwrap(),
            "cubrid://flag"
        );
        assert_eq!(config.resolve_database_url(None).unwrap(), "cubrid://file");
        assert!(matches!(
            Config::default().resolve_database_url(None),
            Err(DialectError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("cubrid-dialect-no-such-config.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
