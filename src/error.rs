//! Typed failures for help capture, extraction, and `conf.py` patching.
//!
//! Workflow code wraps these in `anyhow` with file or utility context; the
//! variants themselves always name the utility or file that failed.
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure to obtain or parse a utility's help text.
#[derive(Error, Debug)]
pub enum HelpError {
    #[error("program command line is empty")]
    EmptyProgram,

    #[error("cannot parse program command line {program:?}: {source}")]
    ProgramSyntax {
        program: String,
        #[source]
        source: shell_words::ParseError,
    },

    #[error("failed to run {program} for utility {util}: {source}")]
    Spawn {
        program: String,
        util: String,
        #[source]
        source: std::io::Error,
    },

    #[error("help for utility {util} exited with {status}: {stderr}")]
    Status {
        util: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("help for utility {util} is not valid UTF-8: {source}")]
    Decode {
        util: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("help for utility {util} is missing the {section} section (marker {marker:?} not found)")]
    MissingSection {
        util: String,
        section: &'static str,
        marker: &'static str,
    },

    #[error("help for utility {util} has the {section} section out of order (expected Synopsis:, Options:, DESCRIPTION:, EXAMPLES:)")]
    OutOfOrder { util: String, section: &'static str },
}

/// Failure to splice records into `conf.py`.
#[derive(Error, Debug)]
pub enum ConfError {
    #[error("marker {marker:?} not found in {}", .path.display())]
    MarkerNotFound { path: PathBuf, marker: &'static str },
}
