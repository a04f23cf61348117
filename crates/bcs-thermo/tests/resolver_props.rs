use bcs_core::{BcsError, Dimension};
use bcs_thermo::{
    EquationOfState, Material, MaterialModel, Phase, PropertyLibrary, StatePoint, StateRange,
    ThermoResolver,
};
use proptest::prelude::*;

fn fluid(key: &str, phase: Phase) -> Material {
    Material {
        id: "1".into(),
        name: key.to_lowercase(),
        phase,
        property_key: Some(key.into()),
    }
}

#[test]
fn air_at_standard_conditions() {
    let library = PropertyLibrary::builtin();
    let resolver = ThermoResolver::new(&library);
    let props = resolver
        .resolve(&fluid("Air", Phase::Gas), 101_325.0, 288.15)
        .expect("air");
    let rho = props.density.as_scalar().unwrap();
    let mu = props.viscosity.as_scalar().unwrap();
    assert!((rho - 1.225).abs() < 5e-3, "rho = {rho}");
    assert!((mu - 1.79e-5).abs() < 1e-7, "mu = {mu}");
    let nu = props.kinematic_viscosity().unwrap();
    assert_eq!(nu.dimension, Dimension::KINEMATIC_VISCOSITY);
    assert!((nu.as_scalar().unwrap() - mu / rho).abs() < 1e-15);
}

#[test]
fn water_near_room_temperature() {
    let library = PropertyLibrary::builtin();
    let resolver = ThermoResolver::new(&library);
    let props = resolver
        .resolve(&fluid("Water", Phase::Liquid), 101_325.0, 293.15)
        .expect("water");
    let rho = props.density.as_scalar().unwrap();
    let mu = props.viscosity.as_scalar().unwrap();
    assert!((rho - 998.2).abs() < 0.5, "rho = {rho}");
    assert!((mu - 1.002e-3).abs() < 2e-5, "mu = {mu}");
}

#[test]
fn solid_phase_never_reaches_the_provider() {
    struct Panicking;
    impl EquationOfState for Panicking {
        fn evaluate(&self, _: &str, _: f64, _: f64) -> Result<StatePoint, BcsError> {
            panic!("provider must not be called for solids");
        }
    }
    let resolver = ThermoResolver::new(&Panicking);
    let err = resolver
        .resolve(&fluid("Steel", Phase::Solid), 101_325.0, 300.0)
        .expect_err("solid");
    assert!(matches!(err, BcsError::Property(_)));
    assert_eq!(err.info().code, "unsupported-phase");
}

#[test]
fn unknown_material_and_out_of_range_states_fail() {
    let library = PropertyLibrary::builtin();
    let resolver = ThermoResolver::new(&library);
    let err = resolver
        .resolve(&fluid("Unobtainium", Phase::Gas), 101_325.0, 300.0)
        .unwrap_err();
    assert_eq!(err.info().code, "unknown-material");

    let err = resolver
        .resolve(&fluid("Water", Phase::Liquid), 101_325.0, 400.0)
        .unwrap_err();
    assert_eq!(err.info().code, "state-out-of-range");
}

#[test]
fn constant_materials_and_bad_values() {
    let range = StateRange {
        t_min: 0.0,
        t_max: 1e4,
        p_min: 0.0,
        p_max: 1e9,
    };
    let library = PropertyLibrary::new()
        .with_material(
            "Oil",
            MaterialModel::Constant {
                density: 870.0,
                viscosity: 0.1,
                range,
            },
        )
        .with_material(
            "Broken",
            MaterialModel::Constant {
                density: 0.0,
                viscosity: 1.0,
                range,
            },
        );
    let resolver = ThermoResolver::new(&library);
    let props = resolver
        .resolve(&fluid("Oil", Phase::Liquid), 1e5, 300.0)
        .unwrap();
    assert_eq!(props.density.as_scalar(), Some(870.0));
    let err = resolver
        .resolve(&fluid("Broken", Phase::Liquid), 1e5, 300.0)
        .unwrap_err();
    assert_eq!(err.info().code, "non-physical-property");
}

proptest! {
    #[test]
    fn ideal_gas_density_scales_with_pressure(p in 1.0e3f64..1.0e6, t in 200.0f64..1200.0) {
        let library = PropertyLibrary::builtin();
        let a = library.evaluate("Nitrogen", p, t).unwrap();
        let b = library.evaluate("Nitrogen", 2.0 * p, t).unwrap();
        prop_assert!((b.density / a.density - 2.0).abs() < 1e-9);
        prop_assert_eq!(a.viscosity, b.viscosity);
    }
}
