use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CaselogConfig {
    /// Directory under the repo root holding the catalog, or the catalog's
    /// `projects` directory itself. Overrides the default layout search.
    pub root_dir: Option<String>,
    /// Render cards with their Problem/Solution/Impact sections by default.
    pub default_expanded: Option<bool>,
}

pub fn config_filename_candidates() -> [&'static str; 2] {
    [".caselog.toml", ".caselogrc"]
}

pub fn config_path(repo_root: &Path) -> PathBuf {
    repo_root.join(".caselog.toml")
}

pub fn resolve_user_home_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    if let Ok(profile) = std::env::var("USERPROFILE") {
        let trimmed = profile.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    None
}

pub fn resolve_caselog_home_dir() -> Option<PathBuf> {
    if let Ok(value) = std::env::var("CASELOG_HOME") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    resolve_user_home_dir().map(|home| home.join(".caselog"))
}

pub fn global_config_path() -> Option<PathBuf> {
    resolve_caselog_home_dir().map(|home| home.join("config.toml"))
}

pub fn find_config_root(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    for candidate in start.ancestors() {
        for name in config_filename_candidates() {
            if candidate.join(name).is_file() {
                return Some(candidate.to_path_buf());
            }
        }
    }
    None
}

pub fn load_config(repo_root: &Path) -> Option<CaselogConfig> {
    for name in config_filename_candidates() {
        let path = repo_root.join(name);
        if path.is_file() {
            if let Ok(text) = fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str::<CaselogConfig>(&text) {
                    return Some(config);
                }
            }
        }
    }
    None
}

pub fn load_global_config() -> Option<CaselogConfig> {
    let path = global_config_path()?;
    if !path.is_file() {
        return None;
    }
    let text = fs::read_to_string(path).ok()?;
    toml::from_str::<CaselogConfig>(&text).ok()
}

pub fn resolve_default_expanded_with_source(repo_root: &Path) -> (bool, &'static str) {
    if let Some(value) = load_config(repo_root).and_then(|config| config.default_expanded) {
        return (value, "project");
    }
    if let Some(value) = load_global_config().and_then(|config| config.default_expanded) {
        return (value, "global");
    }
    (false, "default")
}

pub fn resolve_default_expanded(repo_root: &Path) -> bool {
    resolve_default_expanded_with_source(repo_root).0
}

pub fn write_config(repo_root: &Path, config: &CaselogConfig) -> Result<PathBuf, ConfigError> {
    let path = config_path(repo_root);
    let body = toml::to_string_pretty(config)?;
    fs::write(&path, body)?;
    Ok(path)
}
