use crate::command::CommandSpec;
use crate::error::{Result, RuntimeError};
use std::process::Stdio;
use tracing::{debug, error};

/// Runs one external command to completion.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessExecutor {
    fn execute(&self, command: &CommandSpec) -> Result<()>;
}

/// Blocking executor; the child shares this process's terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl ProcessExecutor for SystemExecutor {
    fn execute(&self, command: &CommandSpec) -> Result<()> {
        let command_line = command.to_string();
        debug!("Spawning: {}", command_line);

        let status = command
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| RuntimeError::Spawn {
                command: command_line.clone(),
                source,
            })?;

        if !status.success() {
            error!("Command exited with {}: {}", status, command_line);
            return Err(RuntimeError::CommandFailed {
                command: command_line,
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_successful_command() {
        let spec = CommandSpec::new("sh").arg("-c").arg("exit 0");
        assert!(SystemExecutor.execute(&spec).is_ok());
    }

    #[test]
    fn test_nonzero_exit_is_reported() {
        let spec = CommandSpec::new("sh").arg("-c").arg("exit 3");
        let err = SystemExecutor.execute(&spec).unwrap_err();

        match err {
            RuntimeError::CommandFailed { command, code } => {
                assert_eq!(command, "sh -c \"exit 3\"");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_program() {
        let spec = CommandSpec::new("uclad-definitely-not-installed");
        let err = SystemExecutor.execute(&spec).unwrap_err();
        assert!(matches!(err, RuntimeError::Spawn { .. }));
    }
}
