use crate::error::{ResolveError, Result};
use crate::namespace::Namespace;
use std::path::{Path, PathBuf};

/// Lexical parent navigation, kept separate from any filesystem access.
pub trait Ancestry: Sized {
    fn parent_of(&self) -> Option<Self>;

    fn has_parent(&self) -> bool {
        self.parent_of().is_some()
    }
}

impl Ancestry for PathBuf {
    fn parent_of(&self) -> Option<Self> {
        self.parent().map(Path::to_path_buf)
    }
}

/// Climbs from the directory holding `file` once per namespace segment.
///
/// Fails with [`ResolveError::DepthExceeded`] when a filesystem root is reached
/// before every segment has been accounted for.
pub fn resolve_root<P: Ancestry>(file: &P, namespace: &Namespace) -> Result<P> {
    let required = namespace.depth();
    let mut root = file
        .parent_of()
        .ok_or(ResolveError::DepthExceeded {
            required,
            available: 0,
        })?;

    for climbed in 0..required {
        root = root.parent_of().ok_or(ResolveError::DepthExceeded {
            required,
            available: climbed,
        })?;
    }

    Ok(root)
}
