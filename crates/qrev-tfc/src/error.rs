//! Error types for the TFC importer.

use thiserror::Error;

/// Errors that can occur while importing a TFC netlist.
///
/// Every variant carries the 1-based line at which the problem was found.
/// Any error aborts the import; register allocations and gates already
/// passed to the builder are not rolled back.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (control character in the input).
    #[error("[tfc] l:{line} Invalid input at position {position}")]
    LexerError { line: usize, position: usize },

    /// Input ended before the header's `BEGIN` marker.
    #[error("[tfc] l:{line} Invalid file header: no BEGIN marker found")]
    InvalidHeader { line: usize },

    /// Header token is neither a directive nor `BEGIN`.
    #[error("[tfc] l:{line} Unknown command: {command}")]
    UnknownCommand { line: usize, command: String },

    /// `.v` names the same variable twice.
    #[error("[tfc] l:{line} Duplicate variable declaration: {variable}")]
    DuplicateVariable { line: usize, variable: String },

    /// `.i` or `.o` names a variable missing from `.v`.
    #[error("[tfc] l:{line} Unknown variable in {directive} statement: {variable}")]
    UnknownVariableReference {
        line: usize,
        directive: String,
        variable: String,
    },

    /// `.c` literal other than `0` or `1`.
    #[error("[tfc] l:{line} Non-binary constant specified for {variable}: {value}")]
    InvalidConstant {
        line: usize,
        variable: String,
        value: String,
    },

    /// `.c` was given but has no entry for this non-input variable.
    #[error("[tfc] l:{line} No constant specified for non-input variable {variable}")]
    MissingConstant { line: usize, variable: String },

    /// Gate mnemonic is not a `T`/`F` letter followed by digits.
    #[error("[tfc] l:{line} Unsupported gate detected: {mnemonic}")]
    UnsupportedGate { line: usize, mnemonic: String },

    /// Gate arity exceeds the number of qubits in the circuit.
    #[error(
        "[tfc] l:{line} Gate acts on {requested} qubits, but only {available} qubits are available"
    )]
    TooManyQubits {
        line: usize,
        requested: usize,
        available: usize,
    },

    /// Gate statement lists fewer labels than its family has targets.
    #[error("[tfc] l:{line} Gate '{mnemonic}' needs {expected} target(s), got {got} label(s)")]
    MissingTarget {
        line: usize,
        mnemonic: String,
        expected: usize,
        got: usize,
    },

    /// Gate label does not name a declared variable.
    #[error("[tfc] l:{line} Unknown variable in gate statement: {label}")]
    UnresolvedVariable { line: usize, label: String },

    /// Input ended before the `END` marker.
    #[error("[tfc] l:{line} Unexpected end of input: no END marker found")]
    UnexpectedEndOfInput { line: usize },

    /// The circuit builder rejected an operation.
    #[error("[tfc] l:{line} Circuit error: {source}")]
    Circuit {
        line: usize,
        #[source]
        source: qrev_ir::IrError,
    },

    /// Reading the input failed.
    #[error("[tfc] Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Line at which the error was detected, if it relates to the input text.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::LexerError { line, .. }
            | ParseError::InvalidHeader { line }
            | ParseError::UnknownCommand { line, .. }
            | ParseError::DuplicateVariable { line, .. }
            | ParseError::UnknownVariableReference { line, .. }
            | ParseError::InvalidConstant { line, .. }
            | ParseError::MissingConstant { line, .. }
            | ParseError::UnsupportedGate { line, .. }
            | ParseError::TooManyQubits { line, .. }
            | ParseError::MissingTarget { line, .. }
            | ParseError::UnresolvedVariable { line, .. }
            | ParseError::UnexpectedEndOfInput { line }
            | ParseError::Circuit { line, .. } => Some(*line),
            ParseError::Io(_) => None,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_line() {
        let err = ParseError::TooManyQubits {
            line: 7,
            requested: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "[tfc] l:7 Gate acts on 4 qubits, but only 3 qubits are available"
        );
        assert_eq!(err.line(), Some(7));
    }

    #[test]
    fn test_io_has_no_line() {
        let err = ParseError::from(std::io::Error::other("boom"));
        assert_eq!(err.line(), None);
    }
}
