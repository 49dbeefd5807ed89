//! TFC gate statements between `BEGIN` and `END`.

use qrev_ir::{Control, Controls, Gate, Polarity, QubitId};
use tracing::{trace, warn};

use crate::builder::CircuitBuilder;
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Cursor, split_list};

use super::VariableMap;
use super::header::circuit_error;

/// A decoded gate mnemonic such as `t3` or `F2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mnemonic {
    /// The gate family.
    pub gate: Gate,
    /// Total qubits the mnemonic declares; `1` when no digits are given.
    pub arity: usize,
}

impl Mnemonic {
    /// Number of controls the mnemonic declares.
    #[inline]
    pub fn num_controls(&self) -> usize {
        self.arity - 1
    }
}

/// Decode `[TtFf][0-9]*`. Returns `None` for any other shape and for an
/// explicit arity of zero.
pub fn parse_mnemonic(text: &str) -> Option<Mnemonic> {
    let mut chars = text.chars();
    let gate = match chars.next()? {
        't' | 'T' => Gate::X,
        'f' | 'F' => Gate::Swap,
        _ => return None,
    };

    let digits = chars.as_str();
    let arity = if digits.is_empty() {
        1
    } else if digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<usize>().ok().filter(|&n| n > 0)?
    } else {
        return None;
    };

    Some(Mnemonic { gate, arity })
}

/// Split a label into the variable name and its control polarity.
///
/// A trailing apostrophe marks a negative control and is stripped.
pub fn parse_label(label: &str) -> (&str, Polarity) {
    match label.strip_suffix('\'') {
        Some(name) => (name, Polarity::Neg),
        None => (label, Polarity::Pos),
    }
}

fn resolve(var_map: &VariableMap, name: &str, line: usize) -> ParseResult<QubitId> {
    var_map
        .get(name)
        .copied()
        .ok_or_else(|| ParseError::UnresolvedVariable {
            line,
            label: name.to_string(),
        })
}

/// Read gate statements up to and including the `END` marker, emitting each
/// one into `builder` as soon as it is decoded.
///
/// `num_qubits` is the size of the circuit the header allocated. Returns the
/// number of gates emitted.
pub fn read_gates<B: CircuitBuilder>(
    cursor: &mut Cursor<'_>,
    var_map: &VariableMap,
    num_qubits: usize,
    builder: &mut B,
) -> ParseResult<usize> {
    let mut emitted = 0;

    loop {
        let Some(word) = cursor.next_word()? else {
            return Err(ParseError::UnexpectedEndOfInput {
                line: cursor.line(),
            });
        };
        let line = word.line;

        if word.text.starts_with('#') {
            cursor.skip_line()?;
            continue;
        }

        if word.text.eq_ignore_ascii_case("end") {
            return Ok(emitted);
        }

        let mnemonic = parse_mnemonic(word.text).ok_or_else(|| ParseError::UnsupportedGate {
            line,
            mnemonic: word.text.to_string(),
        })?;

        if mnemonic.num_controls() >= num_qubits {
            return Err(ParseError::TooManyQubits {
                line,
                requested: mnemonic.arity,
                available: num_qubits,
            });
        }

        let labels = split_list(cursor.rest_of_line()?);
        let num_targets = mnemonic.gate.num_targets();
        if labels.len() < num_targets {
            return Err(ParseError::MissingTarget {
                line,
                mnemonic: word.text.to_string(),
                expected: num_targets,
                got: labels.len(),
            });
        }

        let (control_labels, target_labels) = labels.split_at(labels.len() - num_targets);

        // Controls form a set; a repeated label adds nothing.
        let mut controls = Controls::with_capacity(control_labels.len());
        for label in control_labels {
            let (name, polarity) = parse_label(label);
            let control = Control::new(resolve(var_map, name, line)?, polarity);
            if !controls.contains(&control) {
                controls.push(control);
            }
        }

        let mut targets = Vec::with_capacity(num_targets);
        for label in target_labels {
            let (name, polarity) = parse_label(label);
            if polarity == Polarity::Neg {
                warn!(line, label, "Ignoring negation mark on gate target");
            }
            targets.push(resolve(var_map, name, line)?);
        }

        trace!(
            line,
            gate = mnemonic.gate.name(controls.len()),
            controls = controls.len(),
            "Emitting gate"
        );

        // Fredkin targets are taken from the end of the list.
        let result = match (mnemonic.gate, targets.as_slice()) {
            (Gate::X, &[target]) => builder.mcx(controls, target),
            (Gate::Swap, &[target1, target0]) => builder.mcswap(controls, target0, target1),
            _ => unreachable!("target count checked against the gate family"),
        };
        result.map_err(circuit_error(line))?;

        emitted += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mnemonic() {
        assert_eq!(
            parse_mnemonic("t3"),
            Some(Mnemonic {
                gate: Gate::X,
                arity: 3
            })
        );
        assert_eq!(
            parse_mnemonic("F2"),
            Some(Mnemonic {
                gate: Gate::Swap,
                arity: 2
            })
        );
        assert_eq!(parse_mnemonic("T").map(|m| m.num_controls()), Some(0));
        assert_eq!(parse_mnemonic("t12").map(|m| m.num_controls()), Some(11));
    }

    #[test]
    fn test_parse_mnemonic_rejects() {
        assert_eq!(parse_mnemonic(""), None);
        assert_eq!(parse_mnemonic("x2"), None);
        assert_eq!(parse_mnemonic("t2a"), None);
        assert_eq!(parse_mnemonic("tt"), None);
        assert_eq!(parse_mnemonic("t0"), None);
        assert_eq!(parse_mnemonic("t-1"), None);
        assert_eq!(parse_mnemonic("t99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_label() {
        assert_eq!(parse_label("a"), ("a", Polarity::Pos));
        assert_eq!(parse_label("a'"), ("a", Polarity::Neg));
        assert_eq!(parse_label("x1'"), ("x1", Polarity::Neg));
    }

    #[test]
    fn test_read_gates_stops_at_end() {
        let mut var_map = VariableMap::default();
        var_map.insert("a".into(), QubitId(0));
        var_map.insert("b".into(), QubitId(1));

        let mut circuit = qrev_ir::Circuit::with_size("t", 2);
        let mut cursor = Cursor::new("t2 a',b\n# done\nEND\nt1 zzz\n");

        let emitted = read_gates(&mut cursor, &var_map, 2, &mut circuit).unwrap();
        assert_eq!(emitted, 1);
        assert_eq!(circuit.instructions()[0].to_string(), "cx !q0 -> q1");
    }

    fn four_lines() -> VariableMap {
        ["a", "b", "c", "d"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), QubitId::from(i)))
            .collect()
    }

    #[test]
    fn test_repeated_control_collapses() {
        let var_map = four_lines();
        let mut circuit = qrev_ir::Circuit::with_size("t", 4);
        let mut cursor = Cursor::new("t3 a,a,b\nf4 c',c',a,b\nEND\n");

        read_gates(&mut cursor, &var_map, 4, &mut circuit).unwrap();
        let gates: Vec<_> = circuit.instructions().iter().map(ToString::to_string).collect();
        assert_eq!(gates, vec!["cx q0 -> q1", "cswap !q2 -> q1, q0"]);
    }

    #[test]
    fn test_control_and_target_overlap() {
        let var_map = four_lines();

        for source in ["t2 a,a\nEND", "t3 a,a',b\nEND", "t3 b,c,b\nEND"] {
            let mut circuit = qrev_ir::Circuit::with_size("t", 4);
            let err = read_gates(&mut Cursor::new(source), &var_map, 4, &mut circuit).unwrap_err();
            assert!(matches!(
                err,
                ParseError::Circuit {
                    line: 1,
                    source: qrev_ir::IrError::DuplicateQubit { .. }
                }
            ));
        }
    }

    #[test]
    fn test_read_gates_missing_end() {
        let var_map = VariableMap::default();
        let mut circuit = qrev_ir::Circuit::with_size("t", 1);
        let mut cursor = Cursor::new("# nothing\n\n");

        let err = read_gates(&mut cursor, &var_map, 1, &mut circuit).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEndOfInput { line: 3 }));
    }
}
