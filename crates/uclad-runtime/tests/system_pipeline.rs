#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uclad_runtime::{Runner, RunnerConfig, RuntimeError, SystemExecutor, Toolchain};

/// Shell script that appends its arguments to `calls.log` beside itself.
fn recorder(dir: &Path) -> PathBuf {
    let script = dir.join("record.sh");
    fs::write(
        &script,
        "#!/bin/sh\necho \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n",
    )
    .unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

fn java_source(dir: &Path) -> PathBuf {
    let package_dir = dir.join("src").join("org").join("demo");
    fs::create_dir_all(&package_dir).unwrap();
    let source = package_dir.join("Main.java");
    fs::write(&source, "package org.demo;\n\npublic class Main {}\n").unwrap();
    source
}

#[test]
fn test_java_pipeline_invokes_compiler_then_launcher() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = TempDir::new().unwrap();
    let script = recorder(dir.path()).to_string_lossy().into_owned();
    let source = java_source(dir.path());

    let config = RunnerConfig {
        toolchain: Toolchain {
            javac: script.clone(),
            java: script,
            ..Toolchain::default()
        },
        dry_run: false,
    };

    let summary = Runner::new(config, SystemExecutor).run(&source).unwrap();
    assert_eq!(summary.commands_run, 2);

    let log = fs::read_to_string(dir.path().join("calls.log")).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], source.display().to_string());
    assert_eq!(
        lines[1],
        format!("-cp {} org.demo.Main", dir.path().join("src").display())
    );
}

#[test]
fn test_failed_compile_skips_launch() {
    let dir = TempDir::new().unwrap();
    let script = recorder(dir.path()).to_string_lossy().into_owned();
    let source = java_source(dir.path());

    let config = RunnerConfig {
        toolchain: Toolchain {
            javac: "false".to_string(),
            java: script,
            ..Toolchain::default()
        },
        dry_run: false,
    };

    let err = Runner::new(config, SystemExecutor).run(&source).unwrap_err();

    assert!(matches!(err, RuntimeError::CommandFailed { code: Some(1), .. }));
    assert!(!dir.path().join("calls.log").exists());
}

#[test]
fn test_interpreted_script_runs_once() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("job.py");
    fs::write(&source, "touch \"$(dirname \"$0\")/ran\"\n").unwrap();

    let config = RunnerConfig {
        toolchain: Toolchain {
            python: "sh".to_string(),
            ..Toolchain::default()
        },
        dry_run: false,
    };

    let summary = Runner::new(config, SystemExecutor).run(&source).unwrap();

    assert_eq!(summary.commands_run, 1);
    assert!(dir.path().join("ran").exists());
}
