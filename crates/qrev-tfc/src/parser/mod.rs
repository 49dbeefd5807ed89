//! Parser for TFC.

pub mod gates;
pub mod header;

use std::io::Read;

use qrev_ir::{Circuit, QubitId};
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::builder::CircuitBuilder;
use crate::error::ParseResult;
use crate::lexer::Cursor;

/// Variable name -> assigned physical qubit.
pub type VariableMap = FxHashMap<String, QubitId>;

/// What an import produced besides the builder calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    /// Variables in `.v` declaration order.
    pub variables: Vec<String>,
    /// Physical qubit of every variable.
    pub variable_map: VariableMap,
    /// Number of gate statements emitted.
    pub num_gates: usize,
}

impl ImportReport {
    /// Physical qubit assigned to `variable`.
    pub fn qubit(&self, variable: &str) -> Option<QubitId> {
        self.variable_map.get(variable).copied()
    }
}

/// Parse a TFC source string into a [`Circuit`] named `circuit`.
pub fn parse(source: &str) -> ParseResult<Circuit> {
    parse_named("circuit", source)
}

/// Parse a TFC source string into a [`Circuit`] with the given name.
pub fn parse_named(name: &str, source: &str) -> ParseResult<Circuit> {
    let mut circuit = Circuit::new(name);
    import(source, &mut circuit)?;
    Ok(circuit)
}

/// Import a TFC source into any [`CircuitBuilder`].
///
/// On error the builder may already hold registers and gates from the part
/// of the input that was accepted; callers should discard it.
#[instrument(skip_all)]
pub fn import<B: CircuitBuilder>(source: &str, builder: &mut B) -> ParseResult<ImportReport> {
    let mut cursor = Cursor::new(source);

    let (decl, variable_map) = header::parse_header(&mut cursor, builder)?;
    let num_gates =
        gates::read_gates(&mut cursor, &variable_map, decl.variables.len(), builder)?;

    debug!(
        qubits = decl.variables.len(),
        gates = num_gates,
        "Imported TFC netlist"
    );

    Ok(ImportReport {
        variables: decl.variables,
        variable_map,
        num_gates,
    })
}

/// Read `reader` to the end and import it.
pub fn import_reader<R: Read, B: CircuitBuilder>(
    mut reader: R,
    builder: &mut B,
) -> ParseResult<ImportReport> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    import(&source, builder)
}
