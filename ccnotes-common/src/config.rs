//! Configuration loading and root folder resolution
//!
//! Root folder priority order:
//! 1. Command-line argument (highest priority)
//! 2. `CCNOTES_ROOT_FOLDER`, then `CCNOTES_ROOT` environment variable
//! 3. `root_folder` key of the TOML config file
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing or malformed TOML file never aborts startup: it is logged and the
//! next tier is used.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Primary root folder environment variable
pub const ROOT_FOLDER_ENV: &str = "CCNOTES_ROOT_FOLDER";
/// Alternative root folder environment variable
pub const ROOT_ENV: &str = "CCNOTES_ROOT";
/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "ccnotes.db";

/// Built-in defaults used when nothing else is configured
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub bind: String,
    pub port: u16,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            bind: "127.0.0.1".to_string(),
            port: 5780,
        }
    }
}

/// Bootstrap configuration loaded from TOML
///
/// Every key is optional; absent keys fall through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub root_folder: Option<PathBuf>,

    #[serde(default)]
    pub bind: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level or `EnvFilter` directive string (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Parse TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load and parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load the platform config file if one exists
    ///
    /// Returns `None` when no file exists or it cannot be parsed (logged).
    pub fn load_default() -> Option<Self> {
        let path = config_file_path()?;
        match Self::load(&path) {
            Ok(config) => {
                debug!("Loaded config file: {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Resolves the root folder holding the database
pub struct RootFolderResolver {
    module_name: String,
    cli_arg: Option<PathBuf>,
    toml: Option<TomlConfig>,
}

impl RootFolderResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_arg: None,
            toml: None,
        }
    }

    /// Command-line override (priority 1)
    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    /// Use an already loaded TOML config instead of searching for the file
    pub fn with_toml(mut self, toml: TomlConfig) -> Self {
        self.toml = Some(toml);
        self
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            debug!("{}: root folder from command line", self.module_name);
            return path.clone();
        }

        for var in [ROOT_FOLDER_ENV, ROOT_ENV] {
            if let Ok(path) = std::env::var(var) {
                if !path.is_empty() {
                    debug!("{}: root folder from {}", self.module_name, var);
                    return PathBuf::from(path);
                }
            }
        }

        let toml_root = match &self.toml {
            Some(toml) => toml.root_folder.clone(),
            None => TomlConfig::load_default().and_then(|toml| toml.root_folder),
        };
        if let Some(path) = toml_root {
            debug!("{}: root folder from config file", self.module_name);
            return path;
        }

        CompiledDefaults::for_current_platform().root_folder
    }
}

/// Prepares the resolved root folder for use
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    pub fn root_folder(&self) -> &Path {
        &self.root_folder
    }

    /// Create the root folder if missing (idempotent)
    pub fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_folder.exists() {
            std::fs::create_dir_all(&self.root_folder)?;
        }
        if !self.root_folder.is_dir() {
            return Err(Error::Config(format!(
                "Root folder is not a directory: {}",
                self.root_folder.display()
            )));
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}

/// Locate the config file for the platform, if one exists
pub fn config_file_path() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("ccnotes").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/ccnotes/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        dirs::data_local_dir()
            .map(|d| d.join("ccnotes"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/ccnotes"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("ccnotes"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/ccnotes"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("ccnotes"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\ccnotes"))
    } else {
        PathBuf::from("./ccnotes_data")
    }
}
