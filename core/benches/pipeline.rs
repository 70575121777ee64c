use criterion::{criterion_group, criterion_main, Criterion};
use nalgebra::Vector3;

use huckel_core::atom::Atom;
use huckel_core::element::ElementType;
use huckel_core::huckel::{huckel_analysis, HuckelParameters};
use huckel_core::molecule::Molecule;

/// A linear polyene-like chain of carbons, 1.4 apart.
fn polyene(n: usize) -> Molecule {
    Molecule::new(
        (0..n)
            .map(|i| {
                Atom::new(
                    ElementType::C,
                    Vector3::new(1.4 * i as f64, 0.0, 0.0),
                )
            })
            .collect(),
    )
}

fn bench_pipeline(c: &mut Criterion) {
    let parameters = HuckelParameters::default();

    for n in [16usize, 64, 256] {
        let molecule = polyene(n);

        c.bench_function(&format!("huckel analysis, {n}-atom chain"), |b| {
            b.iter(|| huckel_analysis(&molecule, &parameters))
        });
    }
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
