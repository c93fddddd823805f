use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::error;
use serde::Deserialize;

use crate::error::Error;

const SYSTEM_CONFIG_PATH: &str = "/etc/gandi-dns-update/config.toml";

const DEFAULT_API_URL: &str = "https://api.gandi.net/v5/livedns";
const DEFAULT_IP_URL: &str = "https://api.ipify.org";

/// Settings for one run, read from the `[Gandi]` section of the config file.
/// The endpoint URLs default to the production services and only exist as
/// keys so the client can be pointed elsewhere.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub domain: String,
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_ip_url")]
    pub ip_url: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "Gandi")]
    gandi: Config,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_ip_url() -> String {
    DEFAULT_IP_URL.to_string()
}

impl Config {
    /// Resolve the config path and load it. Candidates are tried in order:
    /// the explicit `--config` path, the user config dir, the system path;
    /// the first file that exists on disk wins.
    pub fn load(explicit: Option<&Path>) -> Result<Config, Error> {
        let path = resolve_path(candidate_paths(explicit))?;
        Config::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Config, Error> {
        let invalid = |reason: String| {
            error!("Config file {} is invalid: {reason}", path.display());
            Error::ConfigInvalid {
                path: path.to_path_buf(),
                reason,
            }
        };

        let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let file: ConfigFile =
            toml::from_str(&raw).map_err(|e| invalid(e.message().to_string()))?;

        let config = file.gandi;
        if config.domain.is_empty() || config.api_key.is_empty() {
            return Err(invalid(
                "'domain' and 'api_key' must be non-empty".to_string(),
            ));
        }
        Ok(config)
    }
}

fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }
    paths.push(user_config_path());
    paths.push(PathBuf::from(SYSTEM_CONFIG_PATH));
    paths
}

fn resolve_path(candidates: Vec<PathBuf>) -> Result<PathBuf, Error> {
    candidates.into_iter().find(|p| p.exists()).ok_or_else(|| {
        error!("Config file not found in user or system directories");
        Error::ConfigNotFound
    })
}

/// User-scoped path via XDG / platform conventions.
fn user_config_path() -> PathBuf {
    ProjectDirs::from("", "", "gandi-dns-update")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("gandi-dns-update");
            p.push("config.toml");
            p
        })
}
