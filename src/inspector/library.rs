use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::demangle::Demangler;
use super::symtab::SymbolDumper;
use crate::utils::{base_name, Symbol, ToolError};

/// Symbols defined and referenced by one shared object.
#[derive(Debug, Clone)]
pub struct SharedObjectLib {
    filename: PathBuf,
    resolved_symbols: HashSet<Symbol>,
    unresolved_symbols: HashSet<Symbol>,
}

impl SharedObjectLib {
    pub fn new(
        filename: impl Into<PathBuf>,
        dumper: &dyn SymbolDumper,
        demangler: &dyn Demangler,
    ) -> Result<Self, ToolError> {
        let filename = filename.into();
        let rows = dumper.dump_symbols(&filename)?;

        let (resolved, unresolved): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|row| row.is_resolved());
        let resolved: Vec<String> = resolved.into_iter().map(|row| row.name).collect();
        let unresolved: Vec<String> = unresolved.into_iter().map(|row| row.name).collect();

        let lib = Self {
            resolved_symbols: demangle_symbols(demangler, resolved)?,
            unresolved_symbols: demangle_symbols(demangler, unresolved)?,
            filename,
        };

        info!(
            "{}: {} resolved, {} unresolved symbols",
            lib.filename.display(),
            lib.resolved_symbols().len(),
            lib.unresolved_symbols().len()
        );

        Ok(lib)
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    /// `libfoo.so` becomes `foo`; anything else is the bare file name.
    pub fn shortname(&self) -> String {
        shortname(&base_name(&self.filename)).to_string()
    }

    pub fn resolved_symbols(&self) -> &HashSet<Symbol> {
        &self.resolved_symbols
    }

    pub fn unresolved_symbols(&self) -> &HashSet<Symbol> {
        &self.unresolved_symbols
    }

    /// Whether this library references a symbol that `library` defines.
    pub fn depends_on(&self, library: &SharedObjectLib) -> bool {
        !self.unresolved_symbols.is_disjoint(&library.resolved_symbols)
    }
}

fn shortname(basename: &str) -> &str {
    basename
        .strip_prefix("lib")
        .and_then(|rest| rest.strip_suffix(".so"))
        .unwrap_or(basename)
}

fn demangle_symbols(
    demangler: &dyn Demangler,
    names: Vec<String>,
) -> Result<HashSet<Symbol>, ToolError> {
    if names.is_empty() {
        return Ok(HashSet::new());
    }

    let demangled = demangler.demangle(&names)?;
    if demangled.len() != names.len() {
        debug!(
            "demangler returned {} lines for {} names",
            demangled.len(),
            names.len()
        );
    }

    Ok(names
        .into_iter()
        .zip(demangled)
        .map(|(mangled, demangled)| Symbol::new(mangled, demangled))
        .collect())
}
