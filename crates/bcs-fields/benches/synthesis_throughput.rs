use bcs_core::CaseStore;
use bcs_fields::{synthesize, FieldRegistry, SynthesisOptions};
use bcs_thermo::PropertyLibrary;
use criterion::{criterion_group, criterion_main, Criterion};

const CASE: &str = include_str!("../../../fixtures/cases/two_region.yaml");

fn bench_synthesis(c: &mut Criterion) {
    let store = CaseStore::from_yaml_str(CASE).expect("fixture case");
    let registry = FieldRegistry::standard().expect("registry");
    let library = PropertyLibrary::builtin();
    let sequential = SynthesisOptions::default();
    let parallel = SynthesisOptions {
        parallel: true,
        ..SynthesisOptions::default()
    };

    c.bench_function("synthesis_sequential", |b| {
        b.iter(|| synthesize(&registry, &store, &library, &sequential).expect("pass"));
    });
    c.bench_function("synthesis_parallel", |b| {
        b.iter(|| synthesize(&registry, &store, &library, &parallel).expect("pass"));
    });
}

criterion_group!(benches, bench_synthesis);
criterion_main!(benches);
