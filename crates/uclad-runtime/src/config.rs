use crate::error::{Result, RuntimeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_FILE_NAME: &str = "uclad.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    #[serde(default)]
    pub toolchain: Toolchain,

    /// Log the planned commands without running them.
    #[serde(default)]
    pub dry_run: bool,
}

/// Program names invoked for each language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Toolchain {
    pub javac: String,
    pub java: String,
    pub c_compiler: String,
    pub cpp_compiler: String,
    pub python: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            javac: "javac".to_string(),
            java: "java".to_string(),
            c_compiler: "clang".to_string(),
            cpp_compiler: "clang++".to_string(),
            python: default_python().to_string(),
        }
    }
}

fn default_python() -> &'static str {
    if cfg!(windows) {
        "python"
    } else {
        "python3"
    }
}

impl RunnerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            RuntimeError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        toml::from_str(&content)
            .map_err(|e| RuntimeError::Config(format!("Invalid {}: {}", path.display(), e)))
    }

    /// Loads the nearest `uclad.toml` at or above `start_dir`, or the defaults
    /// when there is none.
    pub fn discover(start_dir: &Path) -> Result<Self> {
        match find_config_file(start_dir) {
            Some(path) => {
                info!("Using config: {}", path.display());
                Self::from_file(path)
            }
            None => {
                debug!("No {} found from {}", CONFIG_FILE_NAME, start_dir.display());
                Ok(Self::default())
            }
        }
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let start_dir = if start_dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        start_dir
    };
    let mut current = std::path::absolute(start_dir).ok()?;

    if current.is_file() {
        current = current.parent()?.to_path_buf();
    }

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}
