//! Derivation of turbulence quantities from intensity and viscosity ratio.

use bcs_core::{BcsError, Dimension, DimensionedValue, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::field::FieldName;

/// Model constant of the k-epsilon family.
pub const C_MU: f64 = 0.09;

/// Free stream quantities turbulence derivations start from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbulenceInputs {
    /// Velocity scale `[m/s]`.
    pub velocity: f64,
    /// Turbulence intensity as a fraction (0.05 for 5 %).
    pub intensity: f64,
    /// Ratio of turbulent to molecular viscosity.
    pub viscosity_ratio: f64,
}

/// Turbulence quantities derived from one set of [`TurbulenceInputs`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbulenceState {
    /// Turbulent kinetic energy.
    pub k: DimensionedValue,
    /// Turbulent viscosity; also the Spalart-Allmaras initial value.
    pub nut: DimensionedValue,
    /// Specific dissipation rate.
    pub omega: DimensionedValue,
    /// Dissipation rate.
    pub epsilon: DimensionedValue,
}

impl TurbulenceState {
    /// Derives every quantity given the molecular kinematic viscosity `nu`.
    ///
    /// Fails with `non-physical-turbulence` when the viscosity ratio is not
    /// positive or any derived quantity is not finite.
    pub fn derive(inputs: TurbulenceInputs, nu: &DimensionedValue) -> Result<Self, BcsError> {
        nu.ensure_dimension(Dimension::KINEMATIC_VISCOSITY)?;
        if !inputs.viscosity_ratio.is_finite() || inputs.viscosity_ratio <= 0.0 {
            return Err(non_physical("viscosity_ratio", inputs.viscosity_ratio));
        }
        let k = turbulent_kinetic_energy(inputs.velocity, inputs.intensity);
        let nut = turbulent_viscosity(inputs.viscosity_ratio, nu);
        let omega = specific_dissipation_rate(&k, &nut)?;
        let epsilon = dissipation_rate(&k, &nut)?;
        for (name, value) in [("k", &k), ("nut", &nut), ("omega", &omega), ("epsilon", &epsilon)] {
            let value = value.as_scalar().unwrap_or(f64::NAN);
            if !value.is_finite() {
                return Err(non_physical(name, value));
            }
        }
        Ok(Self {
            k,
            nut,
            omega,
            epsilon,
        })
    }

    /// Value for `field`, when the field is a turbulence quantity.
    pub fn get(&self, field: FieldName) -> Option<&DimensionedValue> {
        match field {
            FieldName::K => Some(&self.k),
            FieldName::Omega => Some(&self.omega),
            FieldName::Epsilon => Some(&self.epsilon),
            FieldName::Nut | FieldName::NuTilda => Some(&self.nut),
            FieldName::T | FieldName::U | FieldName::P => None,
        }
    }
}

fn non_physical(quantity: &str, value: f64) -> BcsError {
    BcsError::Property(
        ErrorInfo::new("non-physical-turbulence", "turbulence derivation is not finite")
            .with_context("quantity", quantity)
            .with_context("value", value.to_string()),
    )
}

/// `k = 1.5 (v I)^2`.
pub fn turbulent_kinetic_energy(velocity: f64, intensity: f64) -> DimensionedValue {
    DimensionedValue::scalar(
        1.5 * (velocity * intensity).powi(2),
        Dimension::TURBULENT_KINETIC_ENERGY,
    )
}

/// `nut = b nu`.
pub fn turbulent_viscosity(ratio: f64, nu: &DimensionedValue) -> DimensionedValue {
    nu.scale(ratio)
}

/// `omega = k / nut`.
pub fn specific_dissipation_rate(
    k: &DimensionedValue,
    nut: &DimensionedValue,
) -> Result<DimensionedValue, BcsError> {
    let omega = k.over(nut)?;
    omega.ensure_dimension(Dimension::SPECIFIC_DISSIPATION_RATE)?;
    Ok(omega)
}

/// `epsilon = C_mu k^2 / nut`.
pub fn dissipation_rate(
    k: &DimensionedValue,
    nut: &DimensionedValue,
) -> Result<DimensionedValue, BcsError> {
    let epsilon = k.powi(2)?.over(nut)?.scale(C_MU);
    epsilon.ensure_dimension(Dimension::DISSIPATION_RATE)?;
    Ok(epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivations_match_closed_forms() {
        let nu = DimensionedValue::scalar(1.5e-5, Dimension::KINEMATIC_VISCOSITY);
        let state = TurbulenceState::derive(
            TurbulenceInputs {
                velocity: 10.0,
                intensity: 0.01,
                viscosity_ratio: 10.0,
            },
            &nu,
        )
        .expect("derive");
        let k = state.k.as_scalar().expect("scalar");
        let nut = state.nut.as_scalar().expect("scalar");
        assert!((k - 0.015).abs() < 1e-12);
        assert!((nut - 1.5e-4).abs() < 1e-15);
        assert!((state.omega.as_scalar().expect("scalar") - k / nut).abs() < 1e-9);
        assert!((state.epsilon.as_scalar().expect("scalar") - C_MU * k * k / nut).abs() < 1e-9);
        assert_eq!(state.get(FieldName::NuTilda), Some(&state.nut));
    }

    #[test]
    fn rejects_wrong_viscosity_dimension() {
        let mu = DimensionedValue::scalar(1.8e-5, Dimension::DYNAMIC_VISCOSITY);
        let inputs = TurbulenceInputs {
            velocity: 1.0,
            intensity: 0.05,
            viscosity_ratio: 10.0,
        };
        assert!(TurbulenceState::derive(inputs, &mu).is_err());
    }

    #[test]
    fn rejects_non_physical_inputs() {
        let nu = DimensionedValue::scalar(1.5e-5, Dimension::KINEMATIC_VISCOSITY);
        for ratio in [0.0, -1.0] {
            let inputs = TurbulenceInputs {
                velocity: 10.0,
                intensity: 0.05,
                viscosity_ratio: ratio,
            };
            let err = TurbulenceState::derive(inputs, &nu).expect_err("ratio must be positive");
            assert_eq!(err.info().code, "non-physical-turbulence");
            assert_eq!(err.info().context["quantity"], "viscosity_ratio");
        }

        let inputs = TurbulenceInputs {
            velocity: 1.0e200,
            intensity: 1.0,
            viscosity_ratio: 10.0,
        };
        let err = TurbulenceState::derive(inputs, &nu).expect_err("overflowing k");
        assert_eq!(err.info().code, "non-physical-turbulence");
        assert_eq!(err.info().context["quantity"], "k");
    }
}
