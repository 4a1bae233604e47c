pub mod command;
pub mod config;
pub mod error;
pub mod executor;
pub mod plan;
pub mod runner;

pub use command::CommandSpec;
pub use config::{RunnerConfig, Toolchain, CONFIG_FILE_NAME};
pub use error::{Result, RuntimeError};
pub use executor::{ProcessExecutor, SystemExecutor};
pub use plan::{build_plan, Plan};
pub use runner::{RunSummary, Runner};

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Java,
    C,
    Cpp,
    Python,
}

impl Language {
    /// Picks the language from the text after the last `.` of the file name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_default();
        let extension = file_name
            .rfind('.')
            .map(|pos| &file_name[pos + 1..])
            .unwrap_or("");

        Self::from_extension(extension)
            .ok_or_else(|| RuntimeError::UnsupportedExtension(extension.to_string()))
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "java" => Some(Language::Java),
            "c" => Some(Language::C),
            "cpp" => Some(Language::Cpp),
            "py" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "c++",
            Language::Python => "python",
        }
    }

}
