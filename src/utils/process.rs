use log::debug;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, ExitStatus};
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("`{program}` printed output that is not valid UTF-8")]
    InvalidOutput {
        program: String,
        #[source]
        source: FromUtf8Error,
    },
}

/// Runs `program` with `args` to completion and returns its stdout as text.
///
/// A program that cannot be started, exits non-zero, or prints anything but
/// UTF-8 on stdout is an error.
pub fn run_tool<I, S>(program: &str, args: I) -> Result<String, ToolError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    debug!("running {:?}", command);

    let output = command.output().map_err(|source| ToolError::Spawn {
        program: program.to_string(),
        source,
    })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            program: program.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|source| ToolError::InvalidOutput {
        program: program.to_string(),
        source,
    })
}

/// Last path component as a string, or the whole path if it has none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
