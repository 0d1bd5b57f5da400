use crate::utils::{run_tool, ToolError};

pub trait Demangler {
    /// Returns one demangled line per input name, in input order.
    fn demangle(&self, names: &[String]) -> Result<Vec<String>, ToolError>;
}

/// Demangles by running `c++filt <name>...` once per batch.
pub struct CxxFilt {
    program: String,
}

impl CxxFilt {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CxxFilt {
    fn default() -> Self {
        Self::new("c++filt")
    }
}

impl Demangler for CxxFilt {
    fn demangle(&self, names: &[String]) -> Result<Vec<String>, ToolError> {
        let text = run_tool(&self.program, names)?;
        Ok(split_output(&text))
    }
}

fn split_output(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
