//! The circuit-building seam the importer drives.

use qrev_ir::{Circuit, Controls, IrResult, Permutation, QubitId};

/// Layout state derived from a TFC header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QubitLayout {
    /// Declaration position -> physical qubit at circuit start.
    pub initial_layout: Permutation,
    /// Declaration position -> physical qubit, for declared outputs only.
    pub output_permutation: Permutation,
    /// Per physical qubit: true if its final value is irrelevant.
    pub garbage: Vec<bool>,
}

impl QubitLayout {
    /// Iterate over the physical qubits flagged as garbage.
    pub fn garbage_qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.garbage
            .iter()
            .enumerate()
            .filter(|(_, g)| **g)
            .map(|(q, _)| QubitId::from(q))
    }
}

/// Receiver of everything an import produces.
///
/// Calls arrive in a fixed order: the primary register, the ancillary
/// register (only if there are non-input variables), one `x` per constant
/// `1`, one `set_layout`, then one `mcx` or `mcswap` per gate statement.
/// An error from any method aborts the import.
pub trait CircuitBuilder {
    /// Allocate the register holding the declared inputs.
    fn add_qubit_register(&mut self, size: usize) -> IrResult<()>;

    /// Allocate the register holding constants and ancillae.
    fn add_ancillary_register(&mut self, size: usize) -> IrResult<()>;

    /// Flip a qubit, used to prepare constant `1` lines.
    fn x(&mut self, target: QubitId) -> IrResult<()>;

    /// Install the initial layout, output permutation and garbage flags.
    fn set_layout(&mut self, layout: QubitLayout) -> IrResult<()>;

    /// Append a multi-controlled NOT.
    fn mcx(&mut self, controls: Controls, target: QubitId) -> IrResult<()>;

    /// Append a multi-controlled SWAP.
    fn mcswap(&mut self, controls: Controls, target0: QubitId, target1: QubitId) -> IrResult<()>;
}

#[allow(clippy::cast_possible_truncation)]
impl CircuitBuilder for Circuit {
    fn add_qubit_register(&mut self, size: usize) -> IrResult<()> {
        self.add_qreg("q", size as u32);
        Ok(())
    }

    fn add_ancillary_register(&mut self, size: usize) -> IrResult<()> {
        self.add_ancillary_reg("anc", size as u32);
        Ok(())
    }

    fn x(&mut self, target: QubitId) -> IrResult<()> {
        Circuit::x(self, target).map(|_| ())
    }

    fn set_layout(&mut self, layout: QubitLayout) -> IrResult<()> {
        for qubit in layout.garbage_qubits() {
            self.set_garbage(qubit, true)?;
        }
        self.set_initial_layout(layout.initial_layout)?;
        self.set_output_permutation(layout.output_permutation)
    }

    fn mcx(&mut self, controls: Controls, target: QubitId) -> IrResult<()> {
        Circuit::mcx(self, controls, target).map(|_| ())
    }

    fn mcswap(&mut self, controls: Controls, target0: QubitId, target1: QubitId) -> IrResult<()> {
        Circuit::mcswap(self, controls, target0, target1).map(|_| ())
    }
}
