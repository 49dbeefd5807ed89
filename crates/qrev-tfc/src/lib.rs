//! TFC Importer for qrev
//!
//! This crate reads reversible-logic netlists in the TFC text format and
//! builds them into a [`qrev_ir::Circuit`], or into any other container that
//! implements [`CircuitBuilder`].
//!
//! # Format
//!
//! | Statement | Meaning |
//! |-----------|---------|
//! | `# ...` | Comment to end of line |
//! | `.v a,b,c` | Declare variables; order defines positions |
//! | `.i a,b` | Declared variables that are circuit inputs |
//! | `.o c` | Declared variables that are meaningful outputs |
//! | `.c 0,1` | Initial values of the non-input variables |
//! | `.ol ...` | Output labels (ignored) |
//! | `BEGIN` / `END` | Delimit the gate list (case-insensitive) |
//! | `t3 a,b',c` | Toffoli family: controls `a`, `¬b`, target `c` |
//! | `f3 a,b,c` | Fredkin family: control `a`, swap `b` and `c` |
//!
//! Inputs occupy physical qubits `0..|inputs|` in `.v` order. The remaining
//! variables follow, and a constant `1` is prepared with an `x` gate.
//!
//! # Example
//!
//! ```rust
//! use qrev_ir::QubitId;
//! use qrev_tfc::parse;
//!
//! let tfc = r"
//! .v a,b,c
//! .i a,b
//! .o c
//! BEGIN
//! t2 a,c
//! END
//! ";
//!
//! let circuit = parse(tfc).unwrap();
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.num_ancillae(), 1);
//! assert!(circuit.is_garbage(QubitId(0)));
//! assert_eq!(circuit.instructions()[0].to_string(), "cx q0 -> q2");
//! ```
//!
//! # Custom Containers
//!
//! ```rust
//! use qrev_ir::{Circuit, QubitId};
//! use qrev_tfc::import;
//!
//! let mut circuit = Circuit::new("lines");
//! let report = import(".v a,b\n.i a\n.c 1\nBEGIN\nEND\n", &mut circuit).unwrap();
//!
//! assert_eq!(report.qubit("b"), Some(QubitId(1)));
//! assert_eq!(circuit.instructions()[0].to_string(), "x q1");
//! ```

mod builder;
mod error;
mod lexer;
mod parser;

pub use builder::{CircuitBuilder, QubitLayout};
pub use error::{ParseError, ParseResult};
pub use parser::{ImportReport, VariableMap, import, import_reader, parse, parse_named};

/// Lower-level pieces of the importer, for tools that drive the stages
/// themselves.
pub mod stages {
    pub use crate::lexer::{Cursor, Token, Word, split_list};
    pub use crate::parser::gates::{Mnemonic, parse_label, parse_mnemonic, read_gates};
    pub use crate::parser::header::{
        Declarations, allocate_registers, assign_qubits, build_layout, parse_header,
        read_declarations,
    };
}
