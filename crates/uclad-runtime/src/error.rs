use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Unsupported file extension '{0}'")]
    UnsupportedExtension(String),

    #[error("Package resolution failed: {0}")]
    Resolve(#[from] uclad_resolver::ResolveError),

    #[error("Failed to start command `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error executing command `{command}`: {}", describe_exit(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    Config(String),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
