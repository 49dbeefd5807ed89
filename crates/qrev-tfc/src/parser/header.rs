//! TFC header: directives up to `BEGIN`, qubit assignment and layout.
//!
//! The header is handled in three steps that stay separate:
//!
//! 1. [`read_declarations`] collects `.v`/`.i`/`.o`/`.c` into a
//!    [`Declarations`] snapshot.
//! 2. [`assign_qubits`] walks the variables in declaration order, giving
//!    inputs the physical indices `0..|inputs|` and everything else the
//!    indices after them. Constant `1` lines get an `x` right away.
//! 3. [`build_layout`] derives the initial layout, output permutation and
//!    garbage flags from the finished assignment.

use qrev_ir::{IrError, QubitId};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::builder::{CircuitBuilder, QubitLayout};
use crate::error::{ParseError, ParseResult};
use crate::lexer::{Cursor, split_list};

use super::VariableMap;

/// Everything the header declares, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    /// `.v` names; the index of a name is its position.
    pub variables: Vec<String>,
    /// `.i` names, without repeats.
    pub inputs: Vec<String>,
    /// `.o` names, without repeats.
    pub outputs: Vec<String>,
    /// `.c` literals, aligned with the non-input variables.
    pub constants: Vec<String>,
    /// Line of the last `.c` directive.
    pub constants_line: Option<usize>,
    /// Line of the `BEGIN` marker.
    pub begin_line: usize,
}

impl Declarations {
    /// Number of variables that are not inputs.
    pub fn num_ancillae(&self) -> usize {
        self.variables.len() - self.inputs.len()
    }

    fn is_declared(&self, name: &str) -> bool {
        self.variables.iter().any(|v| v == name)
    }
}

/// Read header directives up to and including the `BEGIN` marker.
pub fn read_declarations(cursor: &mut Cursor<'_>) -> ParseResult<Declarations> {
    let mut decl = Declarations::default();

    loop {
        let Some(word) = cursor.next_word()? else {
            return Err(ParseError::InvalidHeader {
                line: cursor.line(),
            });
        };
        let line = word.line;

        if word.text.starts_with('#') {
            cursor.skip_line()?;
            continue;
        }

        if word.text.eq_ignore_ascii_case("begin") {
            decl.begin_line = line;
            return Ok(decl);
        }

        match word.text {
            ".v" => {
                for name in split_list(cursor.rest_of_line()?) {
                    if decl.is_declared(name) {
                        return Err(ParseError::DuplicateVariable {
                            line,
                            variable: name.to_string(),
                        });
                    }
                    decl.variables.push(name.to_string());
                }
            }
            ".i" | ".o" => {
                let names = split_list(cursor.rest_of_line()?);
                for name in names {
                    if !decl.is_declared(name) {
                        return Err(ParseError::UnknownVariableReference {
                            line,
                            directive: word.text.to_string(),
                            variable: name.to_string(),
                        });
                    }
                    let list = if word.text == ".i" {
                        &mut decl.inputs
                    } else {
                        &mut decl.outputs
                    };
                    if !list.iter().any(|n| n == name) {
                        list.push(name.to_string());
                    }
                }
            }
            ".c" => {
                decl.constants
                    .extend(split_list(cursor.rest_of_line()?).into_iter().map(String::from));
                decl.constants_line = Some(line);
            }
            // Output labels carry no circuit information.
            ".ol" => cursor.skip_line()?,
            _ => {
                return Err(ParseError::UnknownCommand {
                    line,
                    command: word.text.to_string(),
                });
            }
        }
    }
}

pub(super) fn circuit_error(line: usize) -> impl FnOnce(IrError) -> ParseError {
    move |source| ParseError::Circuit { line, source }
}

/// Allocate the primary and, if needed, the ancillary register.
pub fn allocate_registers<B: CircuitBuilder>(
    decl: &Declarations,
    builder: &mut B,
) -> ParseResult<()> {
    let line = decl.begin_line;
    builder
        .add_qubit_register(decl.inputs.len())
        .map_err(circuit_error(line))?;
    if decl.num_ancillae() > 0 {
        builder
            .add_ancillary_register(decl.num_ancillae())
            .map_err(circuit_error(line))?;
    }
    Ok(())
}

/// Assign a physical qubit to every variable.
///
/// Inputs take `0..|inputs|` in declaration order. Other variables take the
/// following indices; when `.c` supplied constants, each one is checked and
/// a `1` is prepared with an `x` on the assigned qubit.
pub fn assign_qubits<B: CircuitBuilder>(
    decl: &Declarations,
    builder: &mut B,
) -> ParseResult<VariableMap> {
    let inputs: FxHashSet<&str> = decl.inputs.iter().map(String::as_str).collect();
    let constant_line = decl.constants_line.unwrap_or(decl.begin_line);
    let num_inputs = decl.inputs.len();

    let mut var_map = VariableMap::default();
    let mut qidx = 0usize;
    let mut constidx = num_inputs;

    for var in &decl.variables {
        if inputs.contains(var.as_str()) {
            var_map.insert(var.clone(), QubitId::from(qidx));
            qidx += 1;
            continue;
        }

        let qubit = QubitId::from(constidx);
        if !decl.constants.is_empty() {
            let Some(value) = decl.constants.get(constidx - num_inputs) else {
                return Err(ParseError::MissingConstant {
                    line: constant_line,
                    variable: var.clone(),
                });
            };
            match value.as_str() {
                "0" => {}
                "1" => builder.x(qubit).map_err(circuit_error(constant_line))?,
                _ => {
                    return Err(ParseError::InvalidConstant {
                        line: constant_line,
                        variable: var.clone(),
                        value: value.clone(),
                    });
                }
            }
        }
        var_map.insert(var.clone(), qubit);
        constidx += 1;
    }

    Ok(var_map)
}

/// Derive layout, output permutation and garbage flags from an assignment.
///
/// Without `.o` every position is an output. With `.o`, positions whose
/// variable is not listed are left out of the output permutation and their
/// qubits are flagged as garbage.
#[allow(clippy::cast_possible_truncation)]
pub fn build_layout(decl: &Declarations, var_map: &VariableMap) -> QubitLayout {
    let outputs: FxHashSet<&str> = decl.outputs.iter().map(String::as_str).collect();
    let mut layout = QubitLayout {
        garbage: vec![false; decl.variables.len()],
        ..QubitLayout::default()
    };

    for (q, variable) in decl.variables.iter().enumerate() {
        let position = q as u32;
        let p = var_map[variable];
        layout.initial_layout.insert(position, p);

        if outputs.is_empty() || outputs.contains(variable.as_str()) {
            layout.output_permutation.insert(position, p);
        } else {
            layout.output_permutation.remove(position);
            layout.garbage[p.index()] = true;
        }
    }

    layout
}

/// Run the whole header stage against `builder`.
pub fn parse_header<B: CircuitBuilder>(
    cursor: &mut Cursor<'_>,
    builder: &mut B,
) -> ParseResult<(Declarations, VariableMap)> {
    let decl = read_declarations(cursor)?;
    debug!(
        variables = decl.variables.len(),
        inputs = decl.inputs.len(),
        outputs = decl.outputs.len(),
        constants = decl.constants.len(),
        "Read TFC header"
    );

    allocate_registers(&decl, builder)?;
    let var_map = assign_qubits(&decl, builder)?;
    let layout = build_layout(&decl, &var_map);
    builder
        .set_layout(layout)
        .map_err(circuit_error(decl.begin_line))?;

    Ok((decl, var_map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use qrev_ir::Circuit;

    fn declarations(source: &str) -> ParseResult<Declarations> {
        read_declarations(&mut Cursor::new(source))
    }

    #[test]
    fn test_read_declarations() {
        let decl = declarations(
            "# adder\n.v a,b,c,d\n.i a,b\n.o c\n.c 0,1\n.ol x,y\nBEGIN\n",
        )
        .unwrap();

        assert_eq!(decl.variables, vec!["a", "b", "c", "d"]);
        assert_eq!(decl.inputs, vec!["a", "b"]);
        assert_eq!(decl.outputs, vec!["c"]);
        assert_eq!(decl.constants, vec!["0", "1"]);
        assert_eq!(decl.constants_line, Some(5));
        assert_eq!(decl.begin_line, 7);
        assert_eq!(decl.num_ancillae(), 2);
    }

    #[test]
    fn test_begin_is_case_insensitive() {
        assert!(declarations(".v a\nBegin").is_ok());
        assert!(declarations(".v a\nbegin").is_ok());
    }

    #[test]
    fn test_repeated_input_is_kept_once() {
        let decl = declarations(".v a,b\n.i a,a\n.i a\nBEGIN").unwrap();
        assert_eq!(decl.inputs, vec!["a"]);
    }

    #[test]
    fn test_duplicate_variable() {
        let err = declarations(".v a,b\n.v b\nBEGIN").unwrap_err();
        assert!(matches!(
            err,
            ParseError::DuplicateVariable { line: 2, ref variable } if variable == "b"
        ));
    }

    #[test]
    fn test_unknown_output_reference() {
        let err = declarations(".v a\n.o z\nBEGIN").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownVariableReference { line: 2, ref directive, .. } if directive == ".o"
        ));
    }

    #[test]
    fn test_unknown_commands() {
        let err = declarations(".v a\n.x a\nBEGIN").unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnknownCommand { line: 2, ref command } if command == ".x"
        ));

        let err = declarations("t1 a\nBEGIN").unwrap_err();
        assert!(matches!(err, ParseError::UnknownCommand { line: 1, .. }));
    }

    #[test]
    fn test_missing_begin() {
        let err = declarations(".v a\n.i a\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidHeader { .. }));
    }

    #[test]
    fn test_assign_inputs_in_declaration_order() {
        let decl = declarations(".v x,a,y,b\n.i b,a\nBEGIN").unwrap();
        let mut circuit = Circuit::new("t");
        let var_map = assign_qubits(&decl, &mut circuit).unwrap();

        assert_eq!(var_map["a"], QubitId(0));
        assert_eq!(var_map["b"], QubitId(1));
        assert_eq!(var_map["x"], QubitId(2));
        assert_eq!(var_map["y"], QubitId(3));
    }

    #[test]
    fn test_constant_one_emits_x() {
        let decl = declarations(".v a,b,c\n.i b\n.c 1,0\nBEGIN").unwrap();
        let mut circuit = Circuit::new("t");
        allocate_registers(&decl, &mut circuit).unwrap();
        let var_map = assign_qubits(&decl, &mut circuit).unwrap();

        assert_eq!(var_map["b"], QubitId(0));
        assert_eq!(var_map["a"], QubitId(1));
        assert_eq!(var_map["c"], QubitId(2));
        assert_eq!(circuit.num_ops(), 1);
        assert_eq!(circuit.instructions()[0].to_string(), "x q1");
    }

    #[test]
    fn test_invalid_constant() {
        let decl = declarations(".v a,b\n.i a\n.c 2\nBEGIN").unwrap();
        let mut circuit = Circuit::new("t");
        allocate_registers(&decl, &mut circuit).unwrap();

        let err = assign_qubits(&decl, &mut circuit).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidConstant { line: 3, ref value, .. } if value == "2"
        ));
    }

    #[test]
    fn test_short_constant_list() {
        let decl = declarations(".v a,b,c\n.c 0\nBEGIN").unwrap();
        let mut circuit = Circuit::new("t");
        allocate_registers(&decl, &mut circuit).unwrap();

        let err = assign_qubits(&decl, &mut circuit).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingConstant { ref variable, .. } if variable == "b"
        ));
    }

    #[test]
    fn test_layout_without_outputs() {
        let decl = declarations(".v a,b,c\n.i c\nBEGIN").unwrap();
        let mut circuit = Circuit::new("t");
        let var_map = assign_qubits(&decl, &mut circuit).unwrap();
        let layout = build_layout(&decl, &var_map);

        assert_eq!(
            layout.initial_layout.iter().collect::<Vec<_>>(),
            vec![(0, QubitId(1)), (1, QubitId(2)), (2, QubitId(0))]
        );
        assert_eq!(layout.output_permutation, layout.initial_layout);
        assert_eq!(layout.garbage_qubits().count(), 0);
    }

    #[test]
    fn test_layout_with_outputs() {
        let decl = declarations(".v a,b,c\n.i a,b\n.o c,a\nBEGIN").unwrap();
        let mut circuit = Circuit::new("t");
        let var_map = assign_qubits(&decl, &mut circuit).unwrap();
        let layout = build_layout(&decl, &var_map);

        assert_eq!(
            layout.output_permutation.iter().collect::<Vec<_>>(),
            vec![(0, QubitId(0)), (2, QubitId(2))]
        );
        assert_eq!(layout.garbage, vec![false, true, false]);
        assert!(layout.initial_layout.is_identity());
    }
}
