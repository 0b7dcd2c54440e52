//! Invoking the Graphviz command line tools on rendered DOT files.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::error::{IdiomGraphError, Result};

/// Runs a Graphviz layout program such as `dot`.
#[derive(Debug, Clone)]
pub struct GraphvizCommand {
    program: String,
    format: String,
}

impl GraphvizCommand {
    /// Use the `dot` layout program to produce `format` (e.g. `pdf`, `svg`).
    pub fn new<S: Into<String>>(format: S) -> Self {
        GraphvizCommand {
            program: "dot".to_string(),
            format: format.into(),
        }
    }

    /// Use a different executable.
    pub fn with_program<S: Into<String>>(mut self, program: S) -> Self {
        self.program = program.into();
        self
    }

    /// The file the command writes for `source`: `<source>.<format>`.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let mut name = source.as_os_str().to_os_string();
        name.push(".");
        name.push(&self.format);
        PathBuf::from(name)
    }

    /// Lay out `source` and return the path of the produced file.
    pub fn run(&self, source: &Path) -> Result<PathBuf> {
        let output = self.output_path(source);
        debug!(
            "Running {} -T{} {} -o {}",
            self.program,
            self.format,
            source.display(),
            output.display()
        );

        let status = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg(source)
            .arg("-o")
            .arg(&output)
            .status()
            .map_err(|e| IdiomGraphError::render(format!("cannot run {}: {e}", self.program)))?;

        if !status.success() {
            return Err(IdiomGraphError::render(format!(
                "{} exited with {status}",
                self.program
            )));
        }

        info!("Rendered {}", output.display());
        Ok(output)
    }
}
