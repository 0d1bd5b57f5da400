//! In-memory stand-ins for `nm` and `c++filt`.

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::demangle::Demangler;
use super::symtab::{parse_symbol_table, SymbolDumper};
use crate::utils::{SymbolRow, ToolError};

/// Serves canned `nm` output per path; unknown paths fail like a missing file.
#[derive(Default)]
pub struct FakeDumper {
    outputs: HashMap<PathBuf, String>,
}

impl FakeDumper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: impl Into<PathBuf>, nm_output: &str) -> Self {
        self.outputs.insert(path.into(), nm_output.to_string());
        self
    }
}

impl SymbolDumper for FakeDumper {
    fn dump_symbols(&self, path: &Path) -> Result<Vec<SymbolRow>, ToolError> {
        match self.outputs.get(path) {
            Some(text) => Ok(parse_symbol_table(text)),
            None => Err(failed("nm", &format!("{}: No such file", path.display()))),
        }
    }
}

/// Maps names through a lookup table, passing unknown names through unchanged.
#[derive(Default)]
pub struct FakeDemangler {
    names: HashMap<String, String>,
    limit: Option<usize>,
    calls: Cell<usize>,
}

impl FakeDemangler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, mangled: &str, demangled: &str) -> Self {
        self.names.insert(mangled.to_string(), demangled.to_string());
        self
    }

    /// Emit at most `limit` lines regardless of input size.
    pub fn truncated_to(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Demangler for FakeDemangler {
    fn demangle(&self, names: &[String]) -> Result<Vec<String>, ToolError> {
        assert!(!names.is_empty(), "demangler invoked without names");
        self.calls.set(self.calls.get() + 1);

        let limit = self.limit.unwrap_or(names.len());
        Ok(names
            .iter()
            .take(limit)
            .map(|name| self.names.get(name).unwrap_or(name).clone())
            .collect())
    }
}

#[cfg(unix)]
fn failed(program: &str, stderr: &str) -> ToolError {
    use std::os::unix::process::ExitStatusExt;
    ToolError::Failed {
        program: program.to_string(),
        status: std::process::ExitStatus::from_raw(1 << 8),
        stderr: stderr.to_string(),
    }
}

#[cfg(windows)]
fn failed(program: &str, stderr: &str) -> ToolError {
    use std::os::windows::process::ExitStatusExt;
    ToolError::Failed {
        program: program.to_string(),
        status: std::process::ExitStatus::from_raw(1),
        stderr: stderr.to_string(),
    }
}
