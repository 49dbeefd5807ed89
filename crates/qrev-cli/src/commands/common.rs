//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qrev_ir::Circuit;
use qrev_tfc::{ImportReport, import};

/// Load a TFC netlist from a file.
///
/// The circuit is named after the file stem.
pub fn load_circuit(path: &str) -> Result<(Circuit, ImportReport)> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let name = path_obj
        .file_stem()
        .map_or_else(|| "circuit".into(), |s| s.to_string_lossy());

    let mut circuit = Circuit::new(name);
    let report =
        import(&source, &mut circuit).with_context(|| format!("Failed to import {path}"))?;

    Ok((circuit, report))
}
