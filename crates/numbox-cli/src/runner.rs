//! Compile-and-run helper for external source files.
//!
//! Both phases block the calling thread until the child exits; there is no
//! timeout, retry, or cancellation. Failures surface immediately to the
//! caller with the compiler or binary name attached.
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Parameters for compiling and running an external program.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub compiler: String,
    pub compiler_args: Vec<String>,
    pub output: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            compiler: "g++".to_string(),
            compiler_args: Vec::new(),
            output: PathBuf::from("hello"),
        }
    }
}

/// Load a runner configuration from a JSON file.
pub fn load_runner_config<P: AsRef<Path>>(path: P) -> Result<RunnerConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: RunnerConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Compile `source` into `config.output`, blocking until the compiler exits.
pub fn compile(source: &Path, config: &RunnerConfig) -> Result<()> {
    let status = Command::new(&config.compiler)
        .args(&config.compiler_args)
        .arg(source)
        .arg("-o")
        .arg(&config.output)
        .status()
        .with_context(|| format!("Failed to launch compiler '{}'", config.compiler))?;
    if !status.success() {
        bail!("Compiler '{}' exited with {}", config.compiler, status);
    }
    Ok(())
}

/// Run `binary` with no arguments and capture its stdout as UTF-8 text.
pub fn run_captured(binary: &Path) -> Result<String> {
    // A bare file name would resolve through PATH; pin it to the current directory.
    let program = if binary.components().count() == 1 {
        Path::new(".").join(binary)
    } else {
        binary.to_path_buf()
    };
    let output = Command::new(&program)
        .output()
        .with_context(|| format!("Failed to launch '{}'", program.display()))?;
    if !output.status.success() {
        bail!("'{}' exited with {}", program.display(), output.status);
    }
    String::from_utf8(output.stdout)
        .with_context(|| format!("Output of '{}' is not valid UTF-8", program.display()))
}

/// Compile `source` and run the produced binary, returning its captured stdout.
pub fn compile_and_run(source: &Path, config: &RunnerConfig) -> Result<String> {
    compile(source, config)?;
    run_captured(&config.output)
}
