//! Import command implementation.
//!
//! Read a TFC netlist and show the circuit it produces.

use anyhow::Result;
use console::style;
use serde::Serialize;
use tracing::info;

use qrev_ir::{Circuit, Permutation, QubitId};
use qrev_tfc::ImportReport;

use super::common::load_circuit;

/// A variable and the physical qubit it was assigned.
#[derive(Debug, Serialize)]
pub struct VariableSummary<'a> {
    pub name: &'a str,
    pub qubit: QubitId,
}

/// Serializable view of an imported circuit.
#[derive(Debug, Serialize)]
pub struct ImportSummary<'a> {
    pub name: &'a str,
    pub num_qubits: usize,
    pub num_ancillae: usize,
    pub variables: Vec<VariableSummary<'a>>,
    pub garbage: Vec<QubitId>,
    pub initial_layout: &'a Permutation,
    pub output_permutation: &'a Permutation,
    pub depth: usize,
    pub gates: Vec<String>,
}

impl<'a> ImportSummary<'a> {
    pub fn new(circuit: &'a Circuit, report: &'a ImportReport) -> Self {
        let variables = report
            .variables
            .iter()
            .filter_map(|name| {
                report.qubit(name).map(|qubit| VariableSummary {
                    name: name.as_str(),
                    qubit,
                })
            })
            .collect();

        Self {
            name: circuit.name(),
            num_qubits: circuit.num_qubits(),
            num_ancillae: circuit.num_ancillae(),
            variables,
            garbage: circuit.garbage_qubits().collect(),
            initial_layout: circuit.initial_layout(),
            output_permutation: circuit.output_permutation(),
            depth: circuit.depth(),
            gates: circuit
                .instructions()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Execute the import command.
pub fn execute(input: &str, format: &str) -> Result<()> {
    let (circuit, report) = load_circuit(input)?;
    info!(
        input,
        qubits = circuit.num_qubits(),
        gates = report.num_gates,
        "Imported netlist"
    );

    let summary = ImportSummary::new(&circuit, &report);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        _ => print_summary(&summary),
    }

    Ok(())
}

fn format_permutation(permutation: &Permutation) -> String {
    permutation
        .iter()
        .map(|(position, qubit)| format!("{position}→{qubit}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_summary(summary: &ImportSummary<'_>) {
    println!(
        "{} Imported {} ({} qubits, {} ancillae, depth {})",
        style("✓").green().bold(),
        style(summary.name).cyan(),
        summary.num_qubits,
        summary.num_ancillae,
        summary.depth
    );

    println!();
    println!("  {:<16} {}", style("Variable").bold(), style("Qubit").bold());
    for variable in &summary.variables {
        let garbage = if summary.garbage.contains(&variable.qubit) {
            style(" (garbage)").dim().to_string()
        } else {
            String::new()
        };
        println!("  {:<16} {}{}", variable.name, variable.qubit, garbage);
    }

    println!();
    println!(
        "  Initial layout:     {}",
        format_permutation(summary.initial_layout)
    );
    println!(
        "  Output permutation: {}",
        format_permutation(summary.output_permutation)
    );

    println!();
    println!("  {} gates:", summary.gates.len());
    for (i, gate) in summary.gates.iter().enumerate() {
        println!("  {:>4}  {}", style(i).dim(), gate);
    }
}
