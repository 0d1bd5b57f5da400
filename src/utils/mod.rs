mod process;
mod types;

pub use process::{base_name, run_tool, ToolError};
pub use types::{Symbol, SymbolRow};
