//! Qiskit code generator.
//!
//! Walks a parsed [`Program`] and writes a Python script that builds the
//! corresponding `QuantumCircuit`. Generation cannot fail.

use tracing::debug;

use crate::ast::{Fitness, Genome, Organism, OrganismBlock, Program, QuantumOp, QuantumState};

/// Import lines written before any organism.
pub const PREAMBLE: [&str; 4] = [
    "from qiskit import QuantumCircuit, QuantumRegister, ClassicalRegister",
    "from qiskit.quantum_info import Statevector",
    "import numpy as np",
    "",
];

/// Output of the code generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Python source, lines joined by `\n` without a trailing newline.
    pub code: String,
    /// Qubits declared by all genes of all organisms.
    pub num_qubits: u64,
}

/// Generate Qiskit source for a program.
pub fn generate(program: &Program) -> GeneratedCode {
    let mut generator = QiskitGenerator::new();
    generator.emit_program(program);
    GeneratedCode {
        code: generator.lines.join("\n"),
        num_qubits: generator.num_qubits,
    }
}

/// Qiskit generator state.
struct QiskitGenerator {
    lines: Vec<String>,
    /// Running total across organisms, never reset. Parsed programs cannot
    /// overflow it; hand-built trees saturate.
    num_qubits: u64,
}

impl QiskitGenerator {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            num_qubits: 0,
        }
    }

    fn emit_program(&mut self, program: &Program) {
        for line in PREAMBLE {
            self.writeln(line);
        }

        for organism in &program.organisms {
            self.emit_organism(organism);
        }
    }

    fn emit_organism(&mut self, organism: &Organism) {
        self.writeln(format!("# Organism: {}", organism.name));
        self.writeln("");

        self.num_qubits = self.num_qubits.saturating_add(organism.qubit_count());
        debug!(
            organism = %organism.name,
            num_qubits = self.num_qubits,
            "declaring circuit"
        );
        self.writeln(format!("qc = QuantumCircuit({})", self.num_qubits));
        self.writeln("");

        for block in &organism.blocks {
            match block {
                OrganismBlock::Genome(genome) => self.emit_genome(genome),
                OrganismBlock::QuantumState(state) => self.emit_quantum_state(state),
                OrganismBlock::Fitness(fitness) => self.emit_fitness(fitness),
            }
        }
    }

    fn emit_genome(&mut self, genome: &Genome) {
        self.writeln("# Genome encoding");
        for gene in &genome.genes {
            self.writeln(format!(
                "# Gene {}: encode {} into {} qubits",
                gene.name, gene.data_ref, gene.num_qubits
            ));
        }
        self.writeln("");
    }

    fn emit_quantum_state(&mut self, state: &QuantumState) {
        self.writeln("# Quantum state preparation");

        for op in &state.operations {
            match op {
                // Superposition is always prepared on qubit 0; the declared
                // parameters only appear in the comment.
                QuantumOp::State { params, .. } => {
                    self.writeln(format!("# Superposition: {}", python_list(params)));
                    self.writeln("qc.h(0)  # Hadamard for superposition");
                }
                QuantumOp::Entangle { qubit1, qubit2 } => {
                    self.writeln(format!(
                        "qc.cx({qubit1}, {qubit2})  # Entangle qubits {qubit1} and {qubit2}"
                    ));
                }
                // Measures every qubit; the named qubit and binding are not used.
                QuantumOp::Measure { .. } => self.writeln("qc.measure_all()"),
            }
        }

        self.writeln("");
    }

    fn emit_fitness(&mut self, fitness: &Fitness) {
        self.writeln(format!("# Fitness function: {}", fitness.expression));
        self.writeln("");
    }

    fn writeln(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// Render strings as a Python list literal, e.g. `['a', 'b']`.
fn python_list(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|item| python_str(item)).collect();
    format!("[{}]", items.join(", "))
}

/// Render a Python string literal the way `repr` does: single quotes unless
/// only double quotes avoid escaping, control characters as `\xNN`.
fn python_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let code = u32::from(c);
                let escape = match code {
                    0..=0xff => format!("\\x{code:02x}"),
                    0x100..=0xffff => format!("\\u{code:04x}"),
                    _ => format!("\\U{code:08x}"),
                };
                out.push_str(&escape);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Gene;

    fn gene(name: &str, num_qubits: u64) -> Gene {
        Gene {
            name: name.into(),
            data_ref: format!("{}_data", name.to_lowercase()),
            num_qubits,
        }
    }

    fn organism(name: &str, blocks: Vec<OrganismBlock>) -> Organism {
        Organism {
            name: name.into(),
            blocks,
        }
    }

    #[test]
    fn test_empty_program_is_preamble() {
        let generated = generate(&Program::default());
        assert_eq!(
            generated.code,
            "from qiskit import QuantumCircuit, QuantumRegister, ClassicalRegister\n\
             from qiskit.quantum_info import Statevector\n\
             import numpy as np\n"
        );
        assert_eq!(generated.num_qubits, 0);
    }

    #[test]
    fn test_full_organism_output() {
        let program = Program {
            organisms: vec![organism(
                "Test",
                vec![
                    OrganismBlock::Genome(Genome {
                        genes: vec![gene("G1", 2)],
                    }),
                    OrganismBlock::QuantumState(QuantumState {
                        operations: vec![
                            QuantumOp::State {
                                name: "s".into(),
                                params: vec!["0".into(), "1".into()],
                            },
                            QuantumOp::Entangle {
                                qubit1: 0,
                                qubit2: 1,
                            },
                            QuantumOp::Measure {
                                qubit: 1,
                                result: "r".into(),
                            },
                        ],
                    }),
                    OrganismBlock::Fitness(Fitness {
                        expression: "score > 0".into(),
                    }),
                ],
            )],
        };

        let generated = generate(&program);
        let expected = [
            "from qiskit import QuantumCircuit, QuantumRegister, ClassicalRegister",
            "from qiskit.quantum_info import Statevector",
            "import numpy as np",
            "",
            "# Organism: Test",
            "",
            "qc = QuantumCircuit(2)",
            "",
            "# Genome encoding",
            "# Gene G1: encode g1_data into 2 qubits",
            "",
            "# Quantum state preparation",
            "# Superposition: ['0', '1']",
            "qc.h(0)  # Hadamard for superposition",
            "qc.cx(0, 1)  # Entangle qubits 0 and 1",
            "qc.measure_all()",
            "",
            "# Fitness function: score > 0",
            "",
        ]
        .join("\n");

        assert_eq!(generated.code, expected);
        assert_eq!(generated.num_qubits, 2);
    }

    #[test]
    fn test_qubits_accumulate_across_organisms() {
        let program = Program {
            organisms: vec![
                organism(
                    "A",
                    vec![OrganismBlock::Genome(Genome {
                        genes: vec![gene("A1", 1), gene("A2", 2)],
                    })],
                ),
                organism(
                    "B",
                    vec![
                        OrganismBlock::Genome(Genome {
                            genes: vec![gene("B1", 3)],
                        }),
                        OrganismBlock::Genome(Genome {
                            genes: vec![gene("B2", 4)],
                        }),
                    ],
                ),
            ],
        };

        let generated = generate(&program);
        assert_eq!(generated.num_qubits, 10);
        assert!(generated.code.contains("qc = QuantumCircuit(3)"));
        assert!(generated.code.contains("qc = QuantumCircuit(10)"));
    }

    #[test]
    fn test_block_order_preserved() {
        let program = Program {
            organisms: vec![organism(
                "Ordered",
                vec![
                    OrganismBlock::Fitness(Fitness {
                        expression: "first".into(),
                    }),
                    OrganismBlock::Genome(Genome {
                        genes: vec![gene("Late", 5)],
                    }),
                    OrganismBlock::Fitness(Fitness {
                        expression: "first".into(),
                    }),
                ],
            )],
        };

        let code = generate(&program).code;
        let fitness = code.find("# Fitness function: first").unwrap();
        let genome = code.find("# Genome encoding").unwrap();
        assert!(fitness < genome);
        assert_eq!(code.matches("# Fitness function: first").count(), 2);
        // The declaration still counts genes that appear after it in source.
        assert!(code.contains("qc = QuantumCircuit(5)"));
    }

    #[test]
    fn test_python_str_quoting() {
        assert_eq!(python_str("abc"), "'abc'");
        assert_eq!(python_str("\"up\""), "'\"up\"'");
        assert_eq!(python_str("it's"), "\"it's\"");
        assert_eq!(python_str("a\\b"), "'a\\\\b'");
        assert_eq!(python_str("\"a\u{7}b\""), "'\"a\\x07b\"'");
        assert_eq!(python_str("x\u{7f}\u{85}"), "'x\\x7f\\x85'");
        assert_eq!(python_str("tab\there"), "'tab\\there'");
        assert_eq!(python_list(&[]), "[]");
    }
}
