use bcs_core::{Dimension, DimensionedValue};
use proptest::prelude::*;

fn dimension() -> impl Strategy<Value = Dimension> {
    prop::array::uniform7(-4i8..=4).prop_map(Dimension::new)
}

proptest! {
    #[test]
    fn product_then_quotient_restores_dimension(a in dimension(), b in dimension()) {
        prop_assert_eq!((a * b) / b, a);
        prop_assert_eq!(a / a, Dimension::NONE);
    }

    #[test]
    fn square_matches_self_product(a in dimension()) {
        prop_assert_eq!(a.powi(2), a * a);
    }
}

#[test]
fn display_matches_solver_annotation() {
    assert_eq!(Dimension::TEMPERATURE.to_string(), "[0 0 0 1 0 0 0]");
    assert_eq!(Dimension::KINEMATIC_VISCOSITY.to_string(), "[0 2 -1 0 0 0 0]");
}

#[test]
fn turbulence_quantities_combine_to_declared_dimensions() {
    let k = DimensionedValue::scalar(0.375, Dimension::TURBULENT_KINETIC_ENERGY);
    let nut = DimensionedValue::scalar(1.5e-4, Dimension::KINEMATIC_VISCOSITY);
    let omega = k.over(&nut).expect("omega");
    assert_eq!(omega.dimension, Dimension::SPECIFIC_DISSIPATION_RATE);

    let epsilon = k.powi(2).and_then(|k2| k2.over(&nut)).expect("epsilon");
    assert_eq!(epsilon.dimension, Dimension::DISSIPATION_RATE);

    let mu = DimensionedValue::scalar(1.8e-5, Dimension::DYNAMIC_VISCOSITY);
    let rho = DimensionedValue::scalar(1.2, Dimension::DENSITY);
    assert_eq!(mu.over(&rho).expect("nu").dimension, Dimension::KINEMATIC_VISCOSITY);
}

#[test]
fn mismatched_addition_is_rejected() {
    let t = DimensionedValue::scalar(300.0, Dimension::TEMPERATURE);
    let p = DimensionedValue::scalar(101325.0, Dimension::PRESSURE);
    let err = t.plus(&p).expect_err("dimension mismatch");
    assert_eq!(err.info().code, "dimension-mismatch");
}

#[test]
fn vector_arithmetic_requires_scalars() {
    let u = DimensionedValue::vector([1.0, 0.0, 0.0], Dimension::VELOCITY);
    let rho = DimensionedValue::scalar(1.2, Dimension::DENSITY);
    assert_eq!(u.times(&rho).expect_err("shape").info().code, "shape-mismatch");
    assert_eq!(u.norm(), Some(1.0));
}
