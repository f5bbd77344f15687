//! Rendering a merged table as C++ source

use crate::error::Result;
use crate::table::PlatformTable;
use std::io::Write;

/// Default headers included by the generated file
pub const DEFAULT_INCLUDES: [&str; 2] = ["core/input/default_controller_mappings.h", "core/typedefs.h"];

/// Default name of the generated array
pub const DEFAULT_SYMBOL: &str = "DefaultControllerMappings::mappings";

/// Settings for the generated source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Headers to `#include`, in order
    pub includes: Vec<String>,
    /// Qualified name of the `const char *[]` array
    pub symbol: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            includes: DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

/// Write the `#include` lines that precede diagnostics and the table
pub fn emit_preamble<W: Write>(writer: &mut W, options: &EmitOptions) -> Result<()> {
    for include in &options.includes {
        writeln!(writer, "#include \"{}\"", include)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the null-terminated mappings array
///
/// Platforms appear in first-encountered order, each wrapped in its
/// `<GUARD>_ENABLED` block, even when no records were filed under it.
pub fn emit_table<W: Write>(writer: &mut W, table: &PlatformTable, options: &EmitOptions) -> Result<()> {
    writeln!(writer, "const char *{}[] = {{", options.symbol)?;
    for (platform, records) in table.iter() {
        let guard = platform.guard();
        writeln!(writer, "#ifdef {}_ENABLED", guard)?;
        for record in records.values() {
            writeln!(writer, "\t\"{}\",", record.line)?;
        }
        writeln!(writer, "#endif // {}_ENABLED", guard)?;
    }
    writeln!(writer, "\tnullptr")?;
    writeln!(writer, "}};")?;
    Ok(())
}
