//! End-to-end compilation of fixture programs.

use dnalang_compiler::{CompilationResult, compile};

const SYMBIONTS: &str = include_str!("fixtures/symbionts.dna");

#[test]
fn test_symbionts_generated_code() {
    let CompilationResult::Success(compilation) = compile(SYMBIONTS) else {
        panic!("fixture should compile");
    };

    let expected = [
        "from qiskit import QuantumCircuit, QuantumRegister, ClassicalRegister",
        "from qiskit.quantum_info import Statevector",
        "import numpy as np",
        "",
        "# Organism: Harvester",
        "",
        "qc = QuantumCircuit(3)",
        "",
        "# Genome encoding",
        "# Gene Sensor: encode sunlight into 2 qubits",
        "# Gene Motor: encode terrain into 1 qubits",
        "",
        "# Quantum state preparation",
        "# Superposition: ['north', 'south', '0.5']",
        "qc.h(0)  # Hadamard for superposition",
        "qc.cx(0, 1)  # Entangle qubits 0 and 1",
        "qc.measure_all()",
        "",
        "# Fitness function: energy * 2 - distance",
        "",
        "# Organism: Keeper",
        "",
        "qc = QuantumCircuit(6)",
        "",
        "# Genome encoding",
        "# Gene Memory: encode history into 3 qubits",
        "",
        "# Fitness function: stability",
        "",
    ]
    .join("\n");

    assert_eq!(compilation.qiskit_code, expected);
    assert_eq!(compilation.num_qubits, 6);
    assert_eq!(compilation.ast.organisms.len(), 2);
}

#[test]
fn test_symbionts_token_preview() {
    let result = compile(SYMBIONTS);
    let compilation = result.success().unwrap();

    assert_eq!(compilation.tokens.len(), 50);
    let first = &compilation.tokens[0];
    assert_eq!(first.value, "organism");
    // The leading comment and blank line are skipped but still counted.
    assert_eq!(first.line, 3);
}

#[test]
fn test_symbionts_json_round_trips_through_serde() {
    let json = serde_json::to_string_pretty(&compile(SYMBIONTS)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["num_qubits"], 6);

    let organisms = value["ast"]["children"].as_array().unwrap();
    assert_eq!(organisms.len(), 2);
    assert_eq!(organisms[0]["children"][1]["children"][2]["type"], "MEASURE");
    assert_eq!(
        organisms[0]["children"][1]["children"][2]["value"]["result"],
        "direction"
    );
}
