use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;
use uclad_runtime::{Runner, RunnerConfig, SystemExecutor};

pub fn execute(file: PathBuf, config_path: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let mut config = load_config(&file, config_path.as_deref())?;
    config.dry_run |= dry_run;

    let runner = Runner::new(config, SystemExecutor);
    let summary = runner
        .run(&file)
        .with_context(|| format!("Failed to run {}", file.display()))?;

    info!(
        "✓ Finished {} ({} command(s) run)",
        file.display(),
        summary.commands_run
    );

    Ok(())
}

fn load_config(file: &Path, explicit: Option<&Path>) -> Result<RunnerConfig> {
    match explicit {
        Some(path) => RunnerConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => RunnerConfig::discover(source_dir(file)).context("Failed to load uclad.toml"),
    }
}

/// Directory holding `file`; a bare file name lives in the current directory.
fn source_dir(file: &Path) -> &Path {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
