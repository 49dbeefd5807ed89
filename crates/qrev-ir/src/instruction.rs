//! Circuit instructions combining gates with operands.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::{Control, Controls, Gate};
use crate::qubit::QubitId;

/// A multi-controlled gate with its operands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    /// The gate family.
    pub gate: Gate,
    /// Controls, in the order they were declared.
    pub controls: Controls,
    /// Target qubits. One for [`Gate::X`], two for [`Gate::Swap`].
    pub targets: Vec<QubitId>,
}

impl Instruction {
    /// Create a multi-controlled NOT.
    pub fn mcx(controls: impl IntoIterator<Item = Control>, target: QubitId) -> Self {
        Self {
            gate: Gate::X,
            controls: controls.into_iter().collect(),
            targets: vec![target],
        }
    }

    /// Create an uncontrolled NOT.
    pub fn x(target: QubitId) -> Self {
        Self::mcx([], target)
    }

    /// Create a multi-controlled SWAP.
    pub fn mcswap(
        controls: impl IntoIterator<Item = Control>,
        target0: QubitId,
        target1: QubitId,
    ) -> Self {
        Self {
            gate: Gate::Swap,
            controls: controls.into_iter().collect(),
            targets: vec![target0, target1],
        }
    }

    /// Get the name of the instruction.
    pub fn name(&self) -> &'static str {
        self.gate.name(self.controls.len())
    }

    /// Iterate over every qubit the instruction touches, controls first.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.controls
            .iter()
            .map(|c| c.qubit)
            .chain(self.targets.iter().copied())
    }

    /// Number of qubits the instruction touches.
    pub fn num_qubits(&self) -> usize {
        self.controls.len() + self.targets.len()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        for (i, control) in self.controls.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{control}")?;
        }
        let arrow = if self.controls.is_empty() { " " } else { " -> " };
        write!(f, "{arrow}")?;
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{target}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcx_instruction() {
        let inst = Instruction::mcx(
            [Control::pos(QubitId(0)), Control::neg(QubitId(1))],
            QubitId(2),
        );
        assert_eq!(inst.name(), "ccx");
        assert_eq!(inst.num_qubits(), 3);
        assert_eq!(
            inst.qubits().collect::<Vec<_>>(),
            vec![QubitId(0), QubitId(1), QubitId(2)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::x(QubitId(3)).to_string(), "x q3");
        assert_eq!(
            Instruction::mcswap([Control::neg(QubitId(0))], QubitId(2), QubitId(1)).to_string(),
            "cswap !q0 -> q2, q1"
        );
        assert_eq!(
            Instruction::mcswap([], QubitId(1), QubitId(0)).to_string(),
            "swap q1, q0"
        );
    }
}
