use crate::error::{ResolveError, Result};
use crate::namespace::{extract_namespace, Namespace};
use crate::root::resolve_root;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where and under which name a single source file's entry point can be launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub qualified_name: String,

    pub root_directory: PathBuf,

    #[serde(skip)]
    pub namespace: Namespace,
}

impl Resolution {
    /// Root directory as a classpath argument; an empty relative root means the
    /// current directory.
    pub fn classpath(&self) -> PathBuf {
        if self.root_directory.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            self.root_directory.clone()
        }
    }
}

/// Reads `path` and resolves its qualified entry-point name and classpath root.
pub fn resolve(path: impl AsRef<Path>) -> Result<Resolution> {
    let path = std::path::absolute(path.as_ref()).map_err(|source| {
        ResolveError::FileUnreadable {
            path: path.as_ref().to_path_buf(),
            source,
        }
    })?;

    info!("Resolving package for: {}", path.display());

    let bytes = fs::read(&path).map_err(|source| ResolveError::FileUnreadable {
        path: path.clone(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);

    resolve_source(&path, &source)
}

/// Same as [`resolve`] but with the file contents supplied by the caller.
pub fn resolve_source(path: &Path, source: &str) -> Result<Resolution> {
    let entry = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ResolveError::MissingFileStem(path.to_path_buf()))?;

    let namespace = extract_namespace(source)?;
    let root_directory = resolve_root(&path.to_path_buf(), &namespace)?;
    let qualified_name = namespace.qualify(entry);

    debug!(
        "Resolved {} -> {} (root: {})",
        path.display(),
        qualified_name,
        root_directory.display()
    );

    Ok(Resolution {
        qualified_name,
        root_directory,
        namespace,
    })
}
