//! qrev Reversible Circuit Intermediate Representation
//!
//! This crate provides the circuit container that reversible-logic importers
//! build into. It only knows the gate families reversible netlists use:
//! multi-controlled NOT (Toffoli family) and multi-controlled SWAP (Fredkin
//! family), each with positive or negative control polarity.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] and [`Qubit`] for addressing register members
//! - **Controls**: [`Control`] pairs a qubit with a [`Polarity`]
//! - **Gates**: [`Gate`] selects the family, [`Instruction`] binds operands
//! - **DAG**: [`CircuitDag`] for the wire-level graph representation
//! - **Layouts**: [`Permutation`] for the initial layout and output permutation
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: A Toffoli With a Negative Control
//!
//! ```rust
//! use qrev_ir::{Circuit, Control, QubitId};
//!
//! let mut circuit = Circuit::new("toffoli");
//! circuit.add_qreg("q", 3);
//!
//! circuit
//!     .mcx(
//!         [Control::pos(QubitId(0)), Control::neg(QubitId(1))],
//!         QubitId(2),
//!     )
//!     .unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 3);
//! assert_eq!(circuit.num_ops(), 1);
//! assert_eq!(circuit.instructions()[0].to_string(), "ccx q0, !q1 -> q2");
//! ```
//!
//! # Gate Names
//!
//! | Family | Controls | Name |
//! |--------|----------|------|
//! | NOT | 0 | `x` |
//! | NOT | 1 | `cx` |
//! | NOT | 2 | `ccx` |
//! | NOT | 3+ | `mcx` |
//! | SWAP | 0 | `swap` |
//! | SWAP | 1 | `cswap` |
//! | SWAP | 2+ | `mcswap` |

pub mod circuit;
pub mod dag;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod layout;
pub mod qubit;

pub use circuit::Circuit;
pub use dag::{CircuitDag, DagEdge, DagNode, NodeIndex};
pub use error::{IrError, IrResult};
pub use gate::{Control, Controls, Gate, Polarity};
pub use instruction::Instruction;
pub use layout::Permutation;
pub use qubit::{Qubit, QubitId};
