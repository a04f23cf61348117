#![allow(dead_code)]

use bcs_core::{paths, CaseStore};
use bcs_fields::{synthesize, CaseReport, FieldRegistry, SynthesisOptions};
use bcs_thermo::PropertyLibrary;

pub const TWO_REGION: &str = include_str!("../../../../fixtures/cases/two_region.yaml");

pub fn two_region() -> CaseStore {
    CaseStore::from_yaml_str(TWO_REGION).expect("fixture case")
}

pub fn fluid_boundary(id: u64, sub: &str) -> String {
    format!("{}/{sub}", paths::boundary("fluid", id))
}

pub fn solid_boundary(id: u64, sub: &str) -> String {
    format!("{}/{sub}", paths::boundary("solid", id))
}

pub fn set_model(store: &mut CaseStore, model: &str) {
    store.set(paths::TURBULENCE_MODEL, model);
}

pub fn run(store: &CaseStore) -> CaseReport {
    run_with(store, &SynthesisOptions::default())
}

pub fn run_with(store: &CaseStore, options: &SynthesisOptions) -> CaseReport {
    let registry = FieldRegistry::standard().expect("registry");
    let library = PropertyLibrary::builtin();
    synthesize(&registry, store, &library, options).expect("synthesis pass")
}

pub fn scalar(value: &bcs_core::DimensionedValue) -> f64 {
    value.as_scalar().expect("scalar value")
}
