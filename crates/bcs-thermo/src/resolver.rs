use bcs_core::{BcsError, Dimension, DimensionedValue, ErrorInfo};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::eos::EquationOfState;
use crate::material::Material;

/// Properties of a fluid at one state point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// Density, dimension `[1 -3 0 0 0 0 0]`.
    pub density: DimensionedValue,
    /// Dynamic viscosity, dimension `[1 -1 -1 0 0 0 0]`.
    pub viscosity: DimensionedValue,
}

impl FluidProperties {
    /// Kinematic viscosity `mu / rho`.
    pub fn kinematic_viscosity(&self) -> Result<DimensionedValue, BcsError> {
        self.viscosity.over(&self.density)
    }
}

/// Adapter between field builders and an [`EquationOfState`] provider.
#[derive(Clone, Copy)]
pub struct ThermoResolver<'a> {
    provider: &'a dyn EquationOfState,
}

impl std::fmt::Debug for ThermoResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThermoResolver").finish_non_exhaustive()
    }
}

impl<'a> ThermoResolver<'a> {
    /// Wraps a provider.
    pub fn new(provider: &'a dyn EquationOfState) -> Self {
        Self { provider }
    }

    /// Density and viscosity of `material` at absolute `pressure` `[Pa]` and
    /// `temperature` `[K]`.
    ///
    /// Solid materials are rejected with `unsupported-phase`; callers are
    /// expected to gate on [`crate::Phase::is_fluid`] first.
    pub fn resolve(
        &self,
        material: &Material,
        pressure: f64,
        temperature: f64,
    ) -> Result<FluidProperties, BcsError> {
        if !material.phase.is_fluid() {
            return Err(BcsError::Property(
                ErrorInfo::new("unsupported-phase", "fluid properties requested for a solid")
                    .with_context("material", material.id.as_str())
                    .with_context("phase", material.phase.as_str()),
            ));
        }
        let key = material.property_key.as_deref().ok_or_else(|| {
            BcsError::Property(
                ErrorInfo::new("unknown-material", "material has no property key")
                    .with_context("material", material.id.as_str()),
            )
        })?;
        let state = self.provider.evaluate(key, pressure, temperature)?;
        for (name, value) in [("density", state.density), ("viscosity", state.viscosity)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BcsError::Property(
                    ErrorInfo::new("non-physical-property", "provider returned a non-physical value")
                        .with_context("material", key)
                        .with_context("property", name)
                        .with_context("value", value.to_string()),
                ));
            }
        }
        debug!(material = key, pressure, temperature, density = state.density, viscosity = state.viscosity, "resolved fluid properties");
        Ok(FluidProperties {
            density: DimensionedValue::scalar(state.density, Dimension::DENSITY),
            viscosity: DimensionedValue::scalar(state.viscosity, Dimension::DYNAMIC_VISCOSITY),
        })
    }
}
