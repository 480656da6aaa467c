//! Config location, first-run bootstrap, and loading.

use super::model::Config;
use super::template::{DEFAULT_CONFIG_YAML, DEFAULT_ENVIRONMENT};
use crate::error::{CsError, Result};
use crate::fs::atomic_write_file;
use std::path::{Path, PathBuf};

/// Hidden directory under the home directory holding the config file.
pub const CONFIG_DIR_NAME: &str = ".cs";

/// Name of the config file inside [`CONFIG_DIR_NAME`].
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Config path for an explicit home directory: `<home>/.cs/config.yaml`.
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Resolve the per-user config path.
///
/// Recomputed on every call; nothing is cached.
pub fn resolve_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(CsError::HomeDirUnavailable)?;
    let path = config_path_in(&home);
    tracing::debug!(path = %path.display(), "resolved config path");
    Ok(path)
}

/// Write the default config to `path` unless a file is already there.
///
/// Returns `true` when the file was created. An existing file is never
/// touched. Only a definite "not found" counts as missing; any other error
/// while checking is reported as `ConfigRead`.
pub fn ensure_default_config(path: &Path) -> Result<bool> {
    let exists = path.try_exists().map_err(|source| CsError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    if exists {
        return Ok(false);
    }

    atomic_write_file(path, DEFAULT_CONFIG_YAML).map_err(|source| CsError::ConfigWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "created default configuration");
    Ok(true)
}

impl Config {
    /// Load config from a YAML file, creating the default file first if it
    /// does not exist.
    ///
    /// # Errors
    ///
    /// * `ConfigWrite` - the default file could not be created
    /// * `ConfigRead` - the existing file could not be read
    /// * `ConfigParse` - the content is not valid YAML of the expected shape
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Notices go to stderr so stdout stays machine-readable (`--list --json`).
        if ensure_default_config(path)? {
            eprintln!(
                "Created default configuration file: {} (environment '{}')",
                path.display(),
                DEFAULT_ENVIRONMENT
            );
            eprintln!("Please edit the file to add your environment configurations.");
        }

        let content = std::fs::read_to_string(path).map_err(|source| CsError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = parse_yaml(&content, Some(path))?;
        tracing::debug!(
            path = %path.display(),
            environments = config.environments.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields an empty configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, None)
    }
}

fn parse_yaml(yaml: &str, path: Option<&Path>) -> Result<Config> {
    serde_yaml::from_str(yaml).map_err(|source| CsError::ConfigParse {
        path: path.map(Path::to_path_buf),
        source,
    })
}
