use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "https://closet-recruiting-api.azurewebsites.net/api/data";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub endpoint: String,
    pub user_agent: String,
    pub log_filter: String,
    pub grid_columns: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: "showcase/0.1".to_string(),
            log_filter: "info".to_string(),
            grid_columns: 4,
        }
    }
}

impl Settings {
    /// Load settings. An explicit path must exist; otherwise the default
    /// config file is used when present. Env overrides are applied last.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = match path {
            Some(p) => Self::from_file(p)?,
            None => match default_config_path() {
                Ok(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        settings.apply_env(|k| std::env::var(k).ok());
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Toml { path: path.to_path_buf(), source })
    }

    // Lookup is injected so tests don't have to touch the process env.
    pub(crate) fn apply_env<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(v) = lookup("SHOWCASE_ENDPOINT").filter(|s| !s.trim().is_empty()) { self.endpoint = v; }
        if let Some(v) = lookup("SHOWCASE_USER_AGENT").filter(|s| !s.trim().is_empty()) { self.user_agent = v; }
        if let Some(v) = lookup("SHOWCASE_LOG").filter(|s| !s.trim().is_empty()) { self.log_filter = v; }
        if let Some(n) = lookup("SHOWCASE_GRID_COLUMNS").and_then(|s| s.trim().parse().ok()) { self.grid_columns = n; }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.endpoint)
    }
}

pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEndpoint { endpoint: endpoint.to_string(), reason };
    let parsed = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme `{}`", other))),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj = ProjectDirs::from("dev", "showcase", "showcase").ok_or(ConfigError::NoConfigDir)?;
    Ok(proj.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "grid_columns = 2\n").unwrap();
        let s = Settings::from_file(&path).unwrap();
        assert_eq!(s.grid_columns, 2);
        assert_eq!(s.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(s.log_filter, "info");
    }

    #[test]
    fn explicit_missing_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&tmp.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn bad_toml_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "grid_columns = \"many\"").unwrap();
        assert!(matches!(Settings::from_file(&path), Err(ConfigError::Toml { .. })));
    }

    #[test]
    fn env_overrides_win() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("SHOWCASE_ENDPOINT", "http://localhost:9000/items"),
            ("SHOWCASE_GRID_COLUMNS", "6"),
            ("SHOWCASE_LOG", ""),
        ]);
        let mut s = Settings::default();
        s.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(s.endpoint, "http://localhost:9000/items");
        assert_eq!(s.grid_columns, 6);
        assert_eq!(s.log_filter, "info");
    }

    #[test]
    fn unparsable_column_override_is_ignored() {
        let mut s = Settings::default();
        s.apply_env(|k| (k == "SHOWCASE_GRID_COLUMNS").then(|| "wide".to_string()));
        assert_eq!(s.grid_columns, 4);
    }

    #[test]
    fn endpoint_must_be_http() {
        assert!(validate_endpoint(DEFAULT_ENDPOINT).is_ok());
        assert!(matches!(validate_endpoint("ftp://host/data"), Err(ConfigError::InvalidEndpoint { .. })));
        assert!(validate_endpoint("not a url").is_err());
    }
}
