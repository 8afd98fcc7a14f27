use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qpuzzle_core::{Circuit, Gate, QubitId};
use qpuzzle_gates::{CNot, Hadamard, TGate, Toffoli};
use qpuzzle_sim::{Simulator, SimulatorConfig};
use std::sync::Arc;

fn create_layered_circuit(num_qubits: usize, depth: usize) -> Circuit {
    let mut circuit = Circuit::new(num_qubits);

    for d in 0..depth {
        for i in 0..num_qubits {
            let gate: Arc<dyn Gate> = if (i + d) % 2 == 0 {
                Arc::new(Hadamard)
            } else {
                Arc::new(TGate)
            };
            circuit.add_gate(gate, &[QubitId::new(i)]).unwrap();
        }

        for i in 0..(num_qubits - 1) {
            if (i + d) % 2 == 0 {
                circuit
                    .add_gate(Arc::new(CNot), &[QubitId::new(i), QubitId::new(i + 1)])
                    .unwrap();
            }
        }

        if num_qubits >= 3 {
            circuit
                .add_gate(
                    Arc::new(Toffoli),
                    &[QubitId::new(0), QubitId::new(1), QubitId::new(2)],
                )
                .unwrap();
        }
    }

    circuit
}

fn bench_simulation(c: &mut Criterion) {
    let simulator = Simulator::new(SimulatorConfig::default()).unwrap();
    let mut group = c.benchmark_group("simulation");

    for num_qubits in [2usize, 4, 8, 10] {
        let circuit = create_layered_circuit(num_qubits, 10);
        group.bench_with_input(
            BenchmarkId::new("layered", format!("{}q_d10", num_qubits)),
            &circuit,
            |b, circuit| b.iter(|| simulator.run(black_box(circuit)).unwrap()),
        );
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let simulator = Simulator::new(SimulatorConfig::default().with_seed(7)).unwrap();
    let state = simulator
        .run(&create_layered_circuit(4, 5))
        .unwrap()
        .state;

    c.bench_function("sample_1024_shots_4q", |b| {
        b.iter(|| simulator.sample(black_box(&state), 1024))
    });
}

criterion_group!(benches, bench_simulation, bench_sampling);
criterion_main!(benches);
