/// A symbol name as written in the object file, paired with its demangled form.
///
/// Two symbols are equal only if both names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub mangled: String,
    pub demangled: String,
}

impl Symbol {
    pub fn new(mangled: impl Into<String>, demangled: impl Into<String>) -> Self {
        Self {
            mangled: mangled.into(),
            demangled: demangled.into(),
        }
    }
}

/// One row of symbol-dump output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRow {
    /// `None` when the address column is blank or not hex, i.e. the symbol is undefined here.
    pub address: Option<u64>,
    #[allow(dead_code)]
    pub type_code: char,
    pub name: String,
}

impl SymbolRow {
    pub fn is_resolved(&self) -> bool {
        self.address.is_some()
    }
}
