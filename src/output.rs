//! Rendering of diagnostics for the terminal.

use std::io::{self, Write};

use crate::validation::ValidationResult;

/// Write one line per diagnostic, in emission order
pub fn write_diagnostics<W: Write>(out: &mut W, result: &ValidationResult) -> io::Result<()> {
    for diagnostic in &result.diagnostics {
        writeln!(out, "{}", diagnostic)?;
    }
    out.flush()
}
