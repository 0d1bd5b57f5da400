use anyhow::{Context, Result};
use indexmap::IndexMap;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::io::Write;
use std::path::Path;

use super::demangle::Demangler;
use super::library::SharedObjectLib;
use super::symtab::SymbolDumper;
use crate::utils::base_name;

/// Inspected libraries keyed by base file name, in first-seen order.
pub struct LibrarySet {
    libraries: IndexMap<String, SharedObjectLib>,
}

impl LibrarySet {
    /// Inspects every path in order. The first failure aborts the whole set.
    ///
    /// When two paths share a base name the later one replaces the earlier
    /// but keeps its position.
    pub fn inspect<P: AsRef<Path>>(
        paths: &[P],
        dumper: &dyn SymbolDumper,
        demangler: &dyn Demangler,
    ) -> Result<Self> {
        let progress = ProgressBar::new(paths.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("[{bar:40}] {pos}/{len} {msg}")?.progress_chars("=> "),
        );

        let mut libraries = IndexMap::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            progress.set_message(path.display().to_string());

            let lib = SharedObjectLib::new(path, dumper, demangler)
                .with_context(|| format!("Failed to inspect {}", path.display()))?;
            if let Some(previous) = libraries.insert(base_name(path), lib) {
                debug!(
                    "{} replaces {}",
                    path.display(),
                    previous.filename().display()
                );
            }

            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(Self { libraries })
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Every ordered pair `(a, b)`, self-pairs included, where `a` depends on `b`.
    pub fn edges(&self) -> impl Iterator<Item = (&SharedObjectLib, &SharedObjectLib)> {
        self.libraries.values().flat_map(move |a| {
            self.libraries
                .values()
                .filter(move |b| a.depends_on(b))
                .map(move |b| (a, b))
        })
    }

    /// Writes one `a -> b` line per edge.
    pub fn write_edges<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (a, b) in self.edges() {
            writeln!(out, "{} -> {}", a.shortname(), b.shortname())?;
        }
        Ok(())
    }
}
