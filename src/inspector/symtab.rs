use log::trace;
use std::path::Path;

use crate::utils::{run_tool, SymbolRow, ToolError};

// Fixed-width `nm` row: 16 address columns, space, type letter, space, name.
const ADDRESS_WIDTH: usize = 16;
const TYPE_COLUMN: usize = 17;
const NAME_COLUMN: usize = 18;
const MIN_ROW_LEN: usize = NAME_COLUMN + 1;

pub trait SymbolDumper {
    fn dump_symbols(&self, path: &Path) -> Result<Vec<SymbolRow>, ToolError>;
}

/// Dumps symbol tables by running `nm <path>`.
pub struct Nm {
    program: String,
}

impl Nm {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for Nm {
    fn default() -> Self {
        Self::new("nm")
    }
}

impl SymbolDumper for Nm {
    fn dump_symbols(&self, path: &Path) -> Result<Vec<SymbolRow>, ToolError> {
        let text = run_tool(&self.program, [path])?;
        Ok(parse_symbol_table(&text))
    }
}

/// Parses `nm` output. Rows shorter than 19 characters are skipped.
///
/// Rows are split on `\n` only; a trailing `\r` counts towards the row length.
pub fn parse_symbol_table(text: &str) -> Vec<SymbolRow> {
    text.split('\n').filter_map(parse_row).collect()
}

fn parse_row(line: &str) -> Option<SymbolRow> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() < MIN_ROW_LEN {
        trace!("skipping short row {:?}", line);
        return None;
    }

    let address_field: String = chars[..ADDRESS_WIDTH].iter().collect();
    let name: String = chars[NAME_COLUMN..].iter().collect();

    Some(SymbolRow {
        address: parse_address(&address_field),
        type_code: chars[TYPE_COLUMN],
        name: name.trim().to_string(),
    })
}

/// Hex with optional sign, `0x` prefix and single `_` separators between digits.
fn parse_address(field: &str) -> Option<u64> {
    let field = field.trim();
    let (negative, unsigned) = match field.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, field.strip_prefix('+').unwrap_or(field)),
    };

    let digits = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(rest) => rest.strip_prefix('_').unwrap_or(rest),
        None => unsigned,
    };
    if digits.is_empty()
        || digits.starts_with(['_', '+', '-'])
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    let value = u64::from_str_radix(&digits.replace('_', ""), 16).ok()?;
    Some(if negative { value.wrapping_neg() } else { value })
}
