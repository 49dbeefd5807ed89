//! Reversible gate families and control qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::QubitId;

/// Control polarity.
///
/// A positive control fires on |1⟩, a negative control fires on |0⟩.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Polarity {
    /// Fires when the control qubit is |1⟩.
    #[default]
    Pos,
    /// Fires when the control qubit is |0⟩.
    Neg,
}

/// A control qubit with its polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Control {
    /// The controlling qubit.
    pub qubit: QubitId,
    /// When the control fires.
    pub polarity: Polarity,
}

impl Control {
    /// Create a control with the given polarity.
    pub fn new(qubit: QubitId, polarity: Polarity) -> Self {
        Self { qubit, polarity }
    }

    /// Create a positive control.
    pub fn pos(qubit: QubitId) -> Self {
        Self::new(qubit, Polarity::Pos)
    }

    /// Create a negative control.
    pub fn neg(qubit: QubitId) -> Self {
        Self::new(qubit, Polarity::Neg)
    }

    /// Check if this control fires on |0⟩.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.polarity == Polarity::Neg
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "!")?;
        }
        write!(f, "{}", self.qubit)
    }
}

/// Controls of one instruction, in declaration order without repeats.
pub type Controls = Vec<Control>;

/// The target operation of a multi-controlled gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// NOT on one target (Toffoli family).
    X,
    /// Exchange of two targets (Fredkin family).
    Swap,
}

impl Gate {
    /// Number of target qubits the gate family acts on.
    #[inline]
    pub fn num_targets(self) -> usize {
        match self {
            Gate::X => 1,
            Gate::Swap => 2,
        }
    }

    /// Conventional name of the gate with `num_controls` controls.
    pub fn name(self, num_controls: usize) -> &'static str {
        match (self, num_controls) {
            (Gate::X, 0) => "x",
            (Gate::X, 1) => "cx",
            (Gate::X, 2) => "ccx",
            (Gate::X, _) => "mcx",
            (Gate::Swap, 0) => "swap",
            (Gate::Swap, 1) => "cswap",
            (Gate::Swap, _) => "mcswap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(Gate::X.name(0), "x");
        assert_eq!(Gate::X.name(2), "ccx");
        assert_eq!(Gate::X.name(5), "mcx");
        assert_eq!(Gate::Swap.name(0), "swap");
        assert_eq!(Gate::Swap.name(1), "cswap");
        assert_eq!(Gate::Swap.name(3), "mcswap");
    }

    #[test]
    fn test_control_display() {
        assert_eq!(Control::pos(QubitId(2)).to_string(), "q2");
        assert_eq!(Control::neg(QubitId(2)).to_string(), "!q2");
        assert!(Control::neg(QubitId(0)).is_negative());
        assert_eq!(Polarity::default(), Polarity::Pos);
    }
}
