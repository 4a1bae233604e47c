pub mod error;
pub mod namespace;
pub mod resolver;
pub mod root;

pub use error::{ResolveError, Result};
pub use namespace::{extract_namespace, Namespace};
pub use resolver::{resolve, resolve_source, Resolution};
pub use root::{resolve_root, Ancestry};
