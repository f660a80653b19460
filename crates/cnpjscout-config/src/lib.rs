use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use cnpjscout_core::domain::{validate_window_days, DEFAULT_WINDOW_DAYS};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "cnpjscout";
const CONFIG_FILENAME: &str = "config.toml";

pub const API_KEY_ENV: &str = "CNPJSCOUT_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.cnpja.com/office";
pub const DEFAULT_LIMIT: u32 = 100;
pub const MAX_LIMIT: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_window_days: i64,
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone)]
pub struct RegistryConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub user_agent: Option<String>,
    pub limit: u32,
    pub simei_optant: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_window_days: DEFAULT_WINDOW_DAYS,
            registry: RegistryConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                api_key: None,
                user_agent: None,
                limit: DEFAULT_LIMIT,
                simei_optant: true,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid default_window_days value: {0}")]
    InvalidWindowDays(i64),
    #[error("invalid registry.limit value: {0}")]
    InvalidLimit(u32),
    #[error("invalid registry.{field} value")]
    InvalidRegistryField { field: &'static str },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_window_days: Option<i64>,
    registry: Option<RegistryFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    base_url: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
    limit: Option<u32>,
    simei_optant: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(with_env(AppConfig::default())),
        Err(ConfigError::InvalidConfigPath(_)) if !required => {
            return Ok(with_env(AppConfig::default()))
        }
        Err(err) => return Err(err),
    };
    let config = load_at_path(&path, required)?.unwrap_or_default();
    Ok(with_env(config))
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn with_env(mut config: AppConfig) -> AppConfig {
    if let Some(key) = env::var(API_KEY_ENV).ok().and_then(non_blank) {
        config.registry.api_key = Some(key);
    }
    config
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(days) = parsed.default_window_days {
        config.default_window_days =
            validate_window_days(days).map_err(|_| ConfigError::InvalidWindowDays(days))?;
    }

    if let Some(registry) = parsed.registry {
        if let Some(base_url) = registry.base_url {
            let trimmed = base_url.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::InvalidRegistryField { field: "base_url" });
            }
            config.registry.base_url = trimmed.to_string();
        }
        if let Some(api_key) = registry.api_key {
            config.registry.api_key = Some(
                non_blank(api_key).ok_or(ConfigError::InvalidRegistryField { field: "api_key" })?,
            );
        }
        if let Some(user_agent) = registry.user_agent {
            config.registry.user_agent = Some(
                non_blank(user_agent)
                    .ok_or(ConfigError::InvalidRegistryField { field: "user_agent" })?,
            );
        }
        if let Some(limit) = registry.limit {
            if limit == 0 || limit > MAX_LIMIT {
                return Err(ConfigError::InvalidLimit(limit));
            }
            config.registry.limit = limit;
        }
        if let Some(simei_optant) = registry.simei_optant {
            config.registry.simei_optant = simei_optant;
        }
    }

    Ok(config)
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
