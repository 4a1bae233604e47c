use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Cannot read source file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package declaration at line {line}: missing ';' in `{text}`")]
    MalformedDeclaration { line: usize, text: String },

    #[error("Package structure exceeds directory depth: {required} levels required, {available} available")]
    DepthExceeded { required: usize, available: usize },

    #[error("Source path has no file name: {0}")]
    MissingFileStem(PathBuf),
}
