mod common;

use bcs_core::paths;
use bcs_fields::{BuildContext, FieldName, RegionContext};
use bcs_thermo::PropertyLibrary;
use common::two_region;

#[test]
fn derived_values_are_stable_within_a_pass() {
    let store = two_region();
    let library = PropertyLibrary::builtin();
    let cx = BuildContext::new(&store, &library);
    let region = RegionContext::load(&store, "fluid").expect("fluid region");
    assert!(region.derived_initial_values().is_empty());

    let first = region.derived_initial(&cx, FieldName::Omega).expect("omega");
    let second = region.derived_initial(&cx, FieldName::Omega).expect("omega");
    assert_eq!(first, second);

    let snapshot = region.derived_initial_values();
    assert_eq!(snapshot.get(&FieldName::Omega), Some(&first));
    assert_eq!(snapshot.get(&FieldName::NuTilda), snapshot.get(&FieldName::Nut));
    assert_eq!(snapshot.len(), 5);
}

#[test]
fn failed_derivations_are_not_cached() {
    let store = two_region();
    let mut broken = store.clone();
    broken.remove(&format!(
        "{}/scaleOfVelocity",
        paths::initial_values("fluid")
    ));
    let library = PropertyLibrary::builtin();
    let region = RegionContext::load(&store, "fluid").expect("fluid region");

    let err = region
        .derived_initial(&BuildContext::new(&broken, &library), FieldName::K)
        .expect_err("missing velocity scale");
    assert_eq!(err.info().code, "path-not-found");
    assert!(region.derived_initial_values().is_empty());

    let k = region
        .derived_initial(&BuildContext::new(&store, &library), FieldName::K)
        .expect("retry succeeds");
    assert!((k.as_scalar().expect("scalar") - 0.015).abs() < 1e-12);
}

#[test]
fn solid_regions_refuse_flow_state() {
    let store = two_region();
    let library = PropertyLibrary::builtin();
    let cx = BuildContext::new(&store, &library);
    let region = RegionContext::load(&store, "solid").expect("solid region");
    assert!(!region.is_fluid());
    let t = region.derived_initial(&cx, FieldName::T).expect("temperature");
    assert_eq!(t.as_scalar(), Some(300.0));
    let err = region
        .derived_initial(&cx, FieldName::U)
        .expect_err("no velocity in a solid");
    assert_eq!(err.info().code, "unsupported-phase");
}

#[test]
fn initial_pressure_is_absolute() {
    let mut store = two_region();
    store.set(
        format!("{}/pressure", paths::initial_values("fluid")),
        "500",
    );
    let library = PropertyLibrary::builtin();
    let cx = BuildContext::new(&store, &library);
    let region = RegionContext::load(&store, "fluid").expect("fluid region");
    let p = region.derived_initial(&cx, FieldName::P).expect("pressure");
    assert_eq!(p.as_scalar(), Some(101_825.0));
}

#[test]
fn zero_viscosity_ratio_is_non_physical() {
    let mut store = two_region();
    store.set(
        format!("{}/turbulentViscosity", paths::initial_values("fluid")),
        "0",
    );
    let library = PropertyLibrary::builtin();
    let cx = BuildContext::new(&store, &library);
    let region = RegionContext::load(&store, "fluid").expect("fluid region");
    let err = region
        .derived_initial(&cx, FieldName::Omega)
        .expect_err("omega would be infinite");
    assert_eq!(err.info().code, "non-physical-turbulence");
    assert!(region.derived_initial_values().is_empty());
}
