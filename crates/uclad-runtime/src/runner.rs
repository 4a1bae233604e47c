use crate::config::RunnerConfig;
use crate::error::Result;
use crate::executor::ProcessExecutor;
use crate::plan::build_plan;
use crate::Language;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub language: Language,
    pub commands_run: usize,
}

/// Compiles and runs single source files, one command at a time.
pub struct Runner<E: ProcessExecutor> {
    config: RunnerConfig,
    executor: E,
}

impl<E: ProcessExecutor> Runner<E> {
    pub fn new(config: RunnerConfig, executor: E) -> Self {
        Self { config, executor }
    }

    /// Stops at the first command that fails; later commands are never issued.
    pub fn run(&self, path: &Path) -> Result<RunSummary> {
        let plan = build_plan(path, &self.config.toolchain)?;
        info!("Running {} as {}", path.display(), plan.language.as_str());

        let mut commands_run = 0;
        for command in &plan.commands {
            if self.config.dry_run {
                info!("[dry-run] {}", command);
                continue;
            }

            info!("→ {}", command);
            self.executor.execute(command)?;
            commands_run += 1;
        }

        Ok(RunSummary {
            language: plan.language,
            commands_run,
        })
    }
}
