use crate::command::CommandSpec;
use crate::config::Toolchain;
use crate::error::Result;
use crate::Language;
use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};
use tracing::info;

/// The ordered commands that compile (if needed) and run one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub language: Language,
    pub commands: Vec<CommandSpec>,
}

pub fn build_plan(path: &Path, toolchain: &Toolchain) -> Result<Plan> {
    let language = Language::from_path(path)?;

    let commands = match language {
        Language::Java => java_commands(path, toolchain)?,
        Language::C => native_commands(path, &toolchain.c_compiler),
        Language::Cpp => native_commands(path, &toolchain.cpp_compiler),
        Language::Python => vec![CommandSpec::new(&toolchain.python).arg(path)],
    };

    Ok(Plan { language, commands })
}

/// Resolves before compiling so a bad package clause fails before `javac` runs.
fn java_commands(path: &Path, toolchain: &Toolchain) -> Result<Vec<CommandSpec>> {
    let resolution = uclad_resolver::resolve(path)?;

    info!(
        "Main class: {} (classpath: {})",
        resolution.qualified_name,
        resolution.classpath().display()
    );

    Ok(vec![
        CommandSpec::new(&toolchain.javac).arg(path),
        CommandSpec::new(&toolchain.java)
            .arg("-cp")
            .arg(resolution.classpath())
            .arg(&resolution.qualified_name),
    ])
}

fn native_commands(path: &Path, compiler: &str) -> Vec<CommandSpec> {
    let output = executable_path(path);

    vec![
        CommandSpec::new(compiler)
            .arg("-o")
            .arg(&output)
            .arg(path),
        CommandSpec::new(&output),
    ]
}

/// Binary next to the source, named after its stem. A bare file name is
/// prefixed with `.` so the binary is not looked up on `PATH`.
pub fn executable_path(source: &Path) -> PathBuf {
    let dir = match source.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(EXE_SUFFIX);
    dir.join(name)
}
