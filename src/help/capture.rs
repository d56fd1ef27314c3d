//! Help text capture from the documented program.
use crate::error::HelpError;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

/// Command line used to ask a utility for its help text.
///
/// The program may carry its own arguments (`"./virgil --no-color"`); the
/// utility name and help flag are appended after them.
#[derive(Debug, Clone)]
pub struct HelpCommand {
    argv: Vec<String>,
    help_flag: String,
}

impl HelpCommand {
    pub fn parse(program: &str, help_flag: &str) -> Result<Self, HelpError> {
        let argv = shell_words::split(program).map_err(|source| HelpError::ProgramSyntax {
            program: program.to_string(),
            source,
        })?;
        if argv.is_empty() {
            return Err(HelpError::EmptyProgram);
        }
        Ok(Self {
            argv,
            help_flag: help_flag.to_string(),
        })
    }

    /// File name of the program, used to name generated documents.
    pub fn program_name(&self) -> String {
        Path::new(&self.argv[0])
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.argv[0].clone())
    }

    /// Arguments passed to the program for `util`, program first.
    pub fn argv_for(&self, util: &str) -> Vec<String> {
        let mut argv = self.argv.clone();
        argv.push(util.to_string());
        argv.push(self.help_flag.clone());
        argv
    }

    /// Run the help invocation and return stdout decoded as UTF-8.
    pub fn capture(&self, util: &str) -> Result<String, HelpError> {
        let argv = self.argv_for(util);
        tracing::debug!(?argv, "capturing help");
        let start = Instant::now();
        let output = Command::new(&argv[0])
            .args(&argv[1..])
            .stdin(Stdio::null())
            .output()
            .map_err(|source| HelpError::Spawn {
                program: self.argv[0].clone(),
                util: util.to_string(),
                source,
            })?;
        let elapsed_ms = start.elapsed().as_millis();

        tracing::info!(
            util,
            elapsed_ms,
            stdout_bytes = output.stdout.len(),
            "help capture complete"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HelpError::Status {
                util: util.to_string(),
                status: output.status,
                stderr: stderr.trim().lines().next().unwrap_or_default().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|source| HelpError::Decode {
            util: util.to_string(),
            source,
        })
    }
}
