//! High-level circuit builder API.

use crate::dag::CircuitDag;
use crate::error::{IrError, IrResult};
use crate::gate::Control;
use crate::instruction::Instruction;
use crate::layout::Permutation;
use crate::qubit::{Qubit, QubitId};

/// A reversible circuit.
///
/// Besides the gate sequence, a circuit records which qubits are ancillary,
/// which qubits are garbage at the end, and the two layout permutations.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Qubits in the circuit.
    qubits: Vec<Qubit>,
    /// Per-qubit ancillary flag.
    ancillary: Vec<bool>,
    /// Per-qubit garbage flag.
    garbage: Vec<bool>,
    /// Logical position -> physical qubit at circuit start.
    initial_layout: Permutation,
    /// Logical position -> physical qubit for meaningful outputs.
    output_permutation: Permutation,
    /// The underlying DAG representation.
    dag: CircuitDag,
    /// Counter for generating qubit IDs.
    next_qubit_id: u32,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            qubits: vec![],
            ancillary: vec![],
            garbage: vec![],
            initial_layout: Permutation::new(),
            output_permutation: Permutation::new(),
            dag: CircuitDag::new(),
            next_qubit_id: 0,
        }
    }

    /// Create a circuit with a single register of `num_qubits` qubits and
    /// identity layouts.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        let mut circuit = Self::new(name);
        circuit.add_qreg("q", num_qubits);
        circuit.initial_layout = Permutation::identity(num_qubits);
        circuit.output_permutation = Permutation::identity(num_qubits);
        circuit
    }

    /// Add a quantum register with multiple qubits.
    pub fn add_qreg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        self.add_register(name.into(), size, false)
    }

    /// Add a register of ancillary qubits.
    ///
    /// Ancillary qubits are appended after all previously added qubits.
    pub fn add_ancillary_reg(&mut self, name: impl Into<String>, size: u32) -> Vec<QubitId> {
        self.add_register(name.into(), size, true)
    }

    fn add_register(&mut self, name: String, size: u32, ancillary: bool) -> Vec<QubitId> {
        let mut ids = Vec::with_capacity(size as usize);
        for i in 0..size {
            let id = QubitId(self.next_qubit_id);
            self.next_qubit_id += 1;
            self.qubits.push(Qubit::with_register(id, &name, i));
            self.ancillary.push(ancillary);
            self.garbage.push(false);
            self.dag.add_qubit(id);
            ids.push(id);
        }
        ids
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Pauli-X (NOT) gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::x(qubit))?;
        Ok(self)
    }

    /// Apply a multi-controlled NOT.
    pub fn mcx(
        &mut self,
        controls: impl IntoIterator<Item = Control>,
        target: QubitId,
    ) -> IrResult<&mut Self> {
        self.dag.apply(Instruction::mcx(controls, target))?;
        Ok(self)
    }

    /// Apply a multi-controlled SWAP.
    pub fn mcswap(
        &mut self,
        controls: impl IntoIterator<Item = Control>,
        target0: QubitId,
        target1: QubitId,
    ) -> IrResult<&mut Self> {
        self.dag
            .apply(Instruction::mcswap(controls, target0, target1))?;
        Ok(self)
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Set the initial layout.
    pub fn set_initial_layout(&mut self, layout: Permutation) -> IrResult<()> {
        self.check_in_range(&layout)?;
        self.initial_layout = layout;
        Ok(())
    }

    /// Set the output permutation.
    pub fn set_output_permutation(&mut self, permutation: Permutation) -> IrResult<()> {
        self.check_in_range(&permutation)?;
        self.output_permutation = permutation;
        Ok(())
    }

    /// Mark or unmark a qubit as garbage.
    pub fn set_garbage(&mut self, qubit: QubitId, garbage: bool) -> IrResult<()> {
        let flag = self
            .garbage
            .get_mut(qubit.index())
            .ok_or(IrError::QubitNotFound {
                qubit,
                gate_name: None,
            })?;
        *flag = garbage;
        Ok(())
    }

    fn check_in_range(&self, permutation: &Permutation) -> IrResult<()> {
        match permutation
            .iter()
            .find(|(_, q)| q.index() >= self.qubits.len())
        {
            Some((position, qubit)) => Err(IrError::LayoutOutOfRange {
                position,
                qubit,
                num_qubits: self.qubits.len(),
            }),
            None => Ok(()),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the number of ancillary qubits.
    pub fn num_ancillae(&self) -> usize {
        self.ancillary.iter().filter(|&&a| a).count()
    }

    /// Check if a qubit is ancillary.
    pub fn is_ancillary(&self, qubit: QubitId) -> bool {
        self.ancillary.get(qubit.index()).copied().unwrap_or(false)
    }

    /// Check if a qubit is garbage.
    pub fn is_garbage(&self, qubit: QubitId) -> bool {
        self.garbage.get(qubit.index()).copied().unwrap_or(false)
    }

    /// Per-qubit garbage flags, indexed by physical qubit.
    pub fn garbage(&self) -> &[bool] {
        &self.garbage
    }

    /// Iterate over qubits marked as garbage.
    pub fn garbage_qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.qubits
            .iter()
            .zip(&self.garbage)
            .filter(|(_, g)| **g)
            .map(|(q, _)| q.id)
    }

    /// Get the initial layout.
    pub fn initial_layout(&self) -> &Permutation {
        &self.initial_layout
    }

    /// Get the output permutation.
    pub fn output_permutation(&self) -> &Permutation {
        &self.output_permutation
    }

    /// Get the number of operations.
    pub fn num_ops(&self) -> usize {
        self.dag.num_ops()
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        self.dag.depth()
    }

    /// Collect the instructions in application order.
    pub fn instructions(&self) -> Vec<&Instruction> {
        self.dag.ops().map(|(_, inst)| inst).collect()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }
}
