mod common;

use bcs_core::{CaseStore, ConfigAccessor};
use bcs_fields::{
    catalog::PhysicalType, synthesize, BoundaryEntry, FieldBuilder, FieldName, FieldRegistry,
    SynthesisOptions,
};
use bcs_thermo::PropertyLibrary;
use common::{fluid_boundary, run, run_with, set_model, two_region};
use proptest::prelude::*;

#[test]
fn standard_registry_tables_are_total() {
    let registry = FieldRegistry::standard().expect("every table is total");
    let fields: Vec<FieldName> = registry.builders().map(|builder| builder.field()).collect();
    assert_eq!(fields, FieldName::ALL);
    for builder in registry.builders() {
        assert_eq!(builder.table().field(), builder.field());
    }
}

#[test]
fn every_boundary_gets_one_entry_in_catalog_order() {
    let store = two_region();
    let report = run(&store);
    assert!(report.failures.is_empty(), "{:?}", report.failures);
    for specification in report.fields.specifications() {
        let catalog: Vec<String> = store
            .get_boundary_conditions(&specification.region)
            .expect("catalog")
            .into_iter()
            .map(|record| record.name)
            .collect();
        let names: Vec<&String> = specification.boundary_field.keys().collect();
        assert_eq!(names, catalog.iter().collect::<Vec<_>>());
    }
}

#[test]
fn values_carry_the_field_dimension() {
    for model in ["laminar", "k-epsilon", "k-omega", "spalartAllmaras"] {
        let mut store = two_region();
        set_model(&mut store, model);
        let report = run(&store);
        assert!(report.failures.is_empty(), "{model}: {:?}", report.failures);
        for specification in report.fields.specifications() {
            assert_eq!(specification.dimension, specification.field.dimension());
            assert_eq!(specification.internal_field.dimension, specification.dimension);
            for entry in specification.boundary_field.values() {
                for value in entry.dimensioned_values() {
                    assert_eq!(value.dimension, specification.dimension, "{entry:?}");
                }
            }
        }
    }
}

#[test]
fn repeated_passes_are_identical() {
    let store = two_region();
    let first = run(&store);
    let second = run(&store);
    assert_eq!(first, second);
    assert_eq!(
        first.fields.digest().expect("digest"),
        second.fields.digest().expect("digest")
    );

    let parallel = run_with(
        &store,
        &SynthesisOptions {
            parallel: true,
            threads: 4,
            ..SynthesisOptions::default()
        },
    );
    assert_eq!(parallel, first);
}

#[test]
fn periodic_interfaces_reduce_to_cyclic_ami() {
    let report = run(&two_region());
    for specification in report.fields.specifications() {
        if specification.region == "fluid" {
            assert_eq!(
                specification.entry("periodic"),
                Some(&BoundaryEntry::CyclicAmi),
                "{}",
                specification.field
            );
        }
    }
}

#[test]
fn turbulence_model_gates_fields() {
    let cases = [
        ("inviscid", vec![FieldName::T, FieldName::U, FieldName::P]),
        ("laminar", vec![FieldName::T, FieldName::U, FieldName::P]),
        (
            "spalartAllmaras",
            vec![
                FieldName::T,
                FieldName::U,
                FieldName::P,
                FieldName::NuTilda,
                FieldName::Nut,
            ],
        ),
        (
            "k-epsilon",
            vec![
                FieldName::T,
                FieldName::U,
                FieldName::P,
                FieldName::K,
                FieldName::Epsilon,
                FieldName::Nut,
            ],
        ),
        (
            "k-omega",
            vec![
                FieldName::T,
                FieldName::U,
                FieldName::P,
                FieldName::K,
                FieldName::Omega,
                FieldName::Nut,
            ],
        ),
    ];
    for (model, expected) in cases {
        let mut store = two_region();
        set_model(&mut store, model);
        let report = run(&store);
        let fields: Vec<FieldName> = report.fields.regions["fluid"]
            .fields
            .keys()
            .copied()
            .collect();
        assert_eq!(fields, expected, "{model}");
    }
}

#[test]
fn derived_turbulence_matches_closed_forms() {
    let report = run(&two_region());
    let k = report.fields.get("fluid", FieldName::K).expect("k");
    let omega = report.fields.get("fluid", FieldName::Omega).expect("omega");
    let nut = report.fields.get("fluid", FieldName::Nut).expect("nut");
    let k0 = k.internal_field.as_scalar().expect("k0");
    let nut0 = nut.internal_field.as_scalar().expect("nut0");
    // 10 m/s at 1 % intensity.
    assert!((k0 - 0.015).abs() < 1e-12);
    assert!((omega.internal_field.as_scalar().expect("omega0") - k0 / nut0).abs() < 1e-6);
    match k.entry("walls").expect("walls") {
        BoundaryEntry::KqRWallFunction { value } => assert_eq!(value, &k.internal_field),
        other => panic!("unexpected k wall {other:?}"),
    }
    match k.entry("inlet").expect("inlet") {
        BoundaryEntry::TurbulentIntensityKineticEnergyInlet { intensity, .. } => {
            assert!((intensity - 0.05).abs() < 1e-12)
        }
        other => panic!("unexpected k inlet {other:?}"),
    }
}

#[test]
fn unsupported_combinations_surface_as_markers() {
    let mut store = two_region();
    set_model(&mut store, "spalartAllmaras");
    store.set(
        fluid_boundary(1, "turbulence/spalartAllmaras/specification"),
        "turbulentViscosityRatio",
    );
    let report = run(&store);
    assert!(report.failures.is_empty());
    assert!(!report.is_complete());
    let markers = report.markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].region, "fluid");
    assert_eq!(markers[0].field, FieldName::NuTilda);
    assert_eq!(markers[0].boundary, "inlet");
    assert!(report.fields.get("fluid", FieldName::NuTilda).is_some());
}

#[test]
fn failures_are_collected_or_returned() {
    let mut store = two_region();
    store.remove(&fluid_boundary(3, "wall/velocity/type"));
    let report = run(&store);
    let failed: Vec<Option<FieldName>> = report.failures.iter().map(|f| f.field).collect();
    assert_eq!(
        failed,
        [Some(FieldName::U), Some(FieldName::Omega), Some(FieldName::Nut)]
    );
    assert_eq!(report.failures[0].error.info().code, "path-not-found");
    assert!(report.fields.get("fluid", FieldName::T).is_some());

    let registry = FieldRegistry::standard().expect("registry");
    let library = PropertyLibrary::builtin();
    let options = SynthesisOptions {
        fail_fast: true,
        ..SynthesisOptions::default()
    };
    let err = synthesize(&registry, &store, &library, &options).expect_err("fail fast");
    assert_eq!(err.path(), Some(fluid_boundary(3, "wall/velocity/type").as_str()));
}

#[test]
fn bad_physical_type_fails_the_region() {
    let mut store = two_region();
    store.set(fluid_boundary(6, "physicalType"), "mirror");
    let report = run(&store);
    assert!(!report.fields.regions.contains_key("fluid"));
    assert!(report.fields.regions.contains_key("solid"));
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].region, "fluid");
    assert_eq!(report.failures[0].field, None);
    assert_eq!(report.failures[0].error.info().code, "invalid-value");
}

#[test]
fn duplicate_patch_names_are_rejected() {
    let mut store = two_region();
    store.set(fluid_boundary(6, "name"), "walls");
    let report = run(&store);
    assert!(report
        .failures
        .iter()
        .all(|failure| failure.error.info().code == "duplicate-boundary"));
    assert!(!report.failures.is_empty());
}

#[test]
fn rotating_zones_become_mrf_constants() {
    let report = run(&two_region());
    let constants = &report.fields.regions["fluid"].constants;
    let pressure = constants
        .operating_conditions
        .as_ref()
        .expect("operating conditions");
    assert_eq!(pressure.operating_pressure.as_scalar(), Some(101_325.0));
    assert_eq!(constants.mrf.len(), 1);
    let zone = &constants.mrf[0];
    assert_eq!(zone.name, "MRFCellZone_rotor");
    assert_eq!(zone.cell_zone, "rotor");
    assert!(zone.active);
    assert_eq!(zone.non_rotating_patches, ["walls"]);
    assert_eq!(zone.axis, [0.0, 0.0, 1.0]);
    assert!((zone.omega - 2.0 * std::f64::consts::PI).abs() < 1e-12);
}

#[test]
fn options_restrict_fields() {
    let options = SynthesisOptions::from_yaml_slice(b"fields: [T, p]\nparallel: true\n")
        .expect("options");
    assert_eq!(options.fields, [FieldName::T, FieldName::P]);
    let report = run_with(&two_region(), &options);
    let fields: Vec<FieldName> = report.fields.regions["fluid"]
        .fields
        .keys()
        .copied()
        .collect();
    assert_eq!(fields, [FieldName::T, FieldName::P]);
}

const SIMPLE_TYPES: [PhysicalType; 7] = [
    PhysicalType::Symmetry,
    PhysicalType::Empty,
    PhysicalType::Wedge,
    PhysicalType::Cyclic,
    PhysicalType::Fan,
    PhysicalType::Outflow,
    PhysicalType::SupersonicOutflow,
];

fn duct(types: &[PhysicalType]) -> CaseStore {
    let mut store = CaseStore::new();
    store.set("operatingConditions/pressure", "101325");
    store.set("models/turbulenceModels/model", "laminar");
    store.set("materials/air/name", "air");
    store.set("materials/air/phase", "gas");
    store.set("materials/air/propertyKey", "Air");
    store.set("regions/duct/material", "air");
    store.set("regions/duct/initialization/initialValues/pressure", "0");
    store.set("regions/duct/initialization/initialValues/temperature", "300");
    store.set_vector(
        "regions/duct/initialization/initialValues/velocity",
        [1.0, 0.0, 0.0],
    );
    for (index, physical_type) in types.iter().enumerate() {
        let id = 100 - index as u64;
        store.add_boundary("duct", id, &format!("patch{index}"), physical_type.as_str());
    }
    store
}

proptest! {
    #[test]
    fn boundary_order_follows_declaration(picks in prop::collection::vec(0usize..SIMPLE_TYPES.len(), 1..12)) {
        let types: Vec<PhysicalType> = picks.iter().map(|i| SIMPLE_TYPES[*i]).collect();
        let report = run(&duct(&types));
        prop_assert!(report.failures.is_empty());
        for specification in report.fields.specifications() {
            let names: Vec<String> = specification.boundary_field.keys().cloned().collect();
            let expected: Vec<String> = (0..types.len()).map(|i| format!("patch{i}")).collect();
            prop_assert_eq!(names, expected);
            for (entry, physical_type) in specification.boundary_field.values().zip(&types) {
                let kind = entry.kind().solver_type();
                match physical_type {
                    PhysicalType::Symmetry | PhysicalType::Empty | PhysicalType::Wedge
                    | PhysicalType::Cyclic => prop_assert_eq!(kind, physical_type.as_str()),
                    PhysicalType::Fan => prop_assert_eq!(kind, "cyclic"),
                    _ => prop_assert_eq!(kind, "zeroGradient"),
                }
            }
        }
    }
}
