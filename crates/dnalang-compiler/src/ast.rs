//! Syntax tree for DNA-Lang.
//!
//! Every node serializes to the same `{type, value, children}` record so the
//! tree can be inspected generically from JSON.

use serde::{Serialize, Serializer};

/// Generic serialized form shared by all nodes.
#[derive(Serialize)]
struct Node<'a, V: Serialize, C: Serialize> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: V,
    children: &'a C,
}

const LEAF: &[(); 0] = &[];

fn node<S, V, C>(
    serializer: S,
    kind: &'static str,
    value: V,
    children: &C,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
    C: Serialize,
{
    Node {
        kind,
        value,
        children,
    }
    .serialize(serializer)
}

/// A complete DNA-Lang program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Organisms in source order.
    pub organisms: Vec<Organism>,
}

impl Program {
    /// Sum of the qubit counts of every gene in every organism.
    ///
    /// The parser rejects programs whose total does not fit in `u64`; for
    /// trees built by hand the sum saturates at `u64::MAX`.
    pub fn total_qubits(&self) -> u64 {
        self.organisms
            .iter()
            .map(Organism::qubit_count)
            .fold(0, u64::saturating_add)
    }
}

/// An organism definition: `organism NAME { ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organism {
    pub name: String,
    /// Genome, quantum-state and fitness blocks in source order.
    pub blocks: Vec<OrganismBlock>,
}

impl Organism {
    /// Iterate over the genes of all genome blocks.
    pub fn genes(&self) -> impl Iterator<Item = &Gene> {
        self.blocks.iter().flat_map(|block| match block {
            OrganismBlock::Genome(genome) => genome.genes.as_slice(),
            _ => &[],
        })
    }

    /// Qubits declared by this organism's genes.
    pub fn qubit_count(&self) -> u64 {
        self.genes()
            .map(|gene| gene.num_qubits)
            .fold(0, u64::saturating_add)
    }
}

/// A block nested directly inside an organism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrganismBlock {
    Genome(Genome),
    QuantumState(QuantumState),
    Fitness(Fitness),
}

/// `genome { gene ...; }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genome {
    pub genes: Vec<Gene>,
}

/// `gene NAME = encode(DATA) -> qubits[N];`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gene {
    pub name: String,
    /// Name of the external data the gene encodes.
    pub data_ref: String,
    pub num_qubits: u64,
}

/// `quantum_state { ... }`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantumState {
    pub operations: Vec<QuantumOp>,
}

/// An operation inside a quantum-state block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QuantumOp {
    /// `state NAME = superpose(P1, P2, ...);` with the raw parameter texts.
    State { name: String, params: Vec<String> },

    /// `entangle(q[A], q[B]);`
    Entangle { qubit1: u64, qubit2: u64 },

    /// `measure(q[A]) -> RESULT;`
    Measure { qubit: u64, result: String },
}

impl QuantumOp {
    fn node_type(&self) -> &'static str {
        match self {
            QuantumOp::State { .. } => "STATE",
            QuantumOp::Entangle { .. } => "ENTANGLE",
            QuantumOp::Measure { .. } => "MEASURE",
        }
    }
}

/// `fitness = EXPR;` with the expression kept as space-joined token text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitness {
    pub expression: String,
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        node(serializer, "PROGRAM", (), &self.organisms)
    }
}

impl Serialize for Organism {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        node(serializer, "ORGANISM", &self.name, &self.blocks)
    }
}

impl Serialize for OrganismBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OrganismBlock::Genome(genome) => {
                node(serializer, "GENOME", (), &genome.gene_nodes())
            }
            OrganismBlock::QuantumState(state) => {
                node(serializer, "QUANTUM_STATE", (), &state.operation_nodes())
            }
            OrganismBlock::Fitness(fitness) => {
                node(serializer, "FITNESS", &fitness.expression, LEAF)
            }
        }
    }
}

/// Leaf wrapper so genes and operations serialize as nodes while their
/// plain field layout doubles as the node value.
struct Leaf<'a, T>(&'static str, &'a T);

impl<T: Serialize> Serialize for Leaf<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        node(serializer, self.0, self.1, LEAF)
    }
}

impl Genome {
    fn gene_nodes(&self) -> Vec<Leaf<'_, Gene>> {
        self.genes.iter().map(|gene| Leaf("GENE", gene)).collect()
    }
}

impl QuantumState {
    fn operation_nodes(&self) -> Vec<Leaf<'_, QuantumOp>> {
        self.operations
            .iter()
            .map(|op| Leaf(op.node_type(), op))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Program {
        Program {
            organisms: vec![Organism {
                name: "Test".into(),
                blocks: vec![
                    OrganismBlock::Genome(Genome {
                        genes: vec![Gene {
                            name: "G1".into(),
                            data_ref: "data".into(),
                            num_qubits: 2,
                        }],
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
            }],
        }
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "PROGRAM",
                "value": null,
                "children": [{
                    "type": "ORGANISM",
                    "value": "Test",
                    "children": [
                        {
                            "type": "GENOME",
                            "value": null,
                            "children": [{
                                "type": "GENE",
                                "value": {"name": "G1", "data_ref": "data", "num_qubits": 2},
                                "children": []
                            }]
                        },
                        {
                            "type": "QUANTUM_STATE",
                            "value": null,
                            "children": [
                                {
                                    "type": "STATE",
                                    "value": {"name": "s", "params": ["0", "1"]},
                                    "children": []
                                },
                                {
                                    "type": "ENTANGLE",
                                    "value": {"qubit1": 0, "qubit2": 1},
                                    "children": []
                                },
                                {
                                    "type": "MEASURE",
                                    "value": {"qubit": 1, "result": "r"},
                                    "children": []
                                }
                            ]
                        },
                        {
                            "type": "FITNESS",
                            "value": "score > 0",
                            "children": []
                        }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_qubit_totals() {
        let mut program = sample();
        assert_eq!(program.total_qubits(), 2);

        let mut second = program.organisms[0].clone();
        second.blocks.push(OrganismBlock::Genome(Genome {
            genes: vec![Gene {
                name: "G2".into(),
                data_ref: "more".into(),
                num_qubits: 5,
            }],
        }));
        assert_eq!(second.qubit_count(), 7);

        program.organisms.push(second);
        assert_eq!(program.total_qubits(), 9);
    }
}
