//! Per-region context shared by every field builder of a pass.

use std::collections::BTreeMap;

use bcs_core::{get_enum, paths, BcsError, ConfigAccessor, Dimension, DimensionedValue, ErrorInfo};
use bcs_thermo::{FluidProperties, Material};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::BuildContext;
use crate::catalog::{load_catalog, BoundaryDescriptor, TurbulenceModel};
use crate::field::FieldName;
use crate::turbulence::{TurbulenceInputs, TurbulenceState};

/// Initial state of a fluid region, with pressure made absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    /// Absolute pressure.
    pub pressure: DimensionedValue,
    /// Temperature.
    pub temperature: DimensionedValue,
    /// Velocity vector.
    pub velocity: DimensionedValue,
}

/// Region, its material and boundary catalog, plus values derived lazily from
/// them during a build pass.
///
/// Derived values are computed at most once and never stored when the
/// derivation fails, so a later request retries from scratch.
#[derive(Debug)]
pub struct RegionContext {
    /// Region name.
    pub name: String,
    /// Material assigned to the region.
    pub material: Material,
    /// Turbulence model of the case.
    pub turbulence_model: TurbulenceModel,
    /// Boundaries in declaration order.
    pub boundaries: Vec<BoundaryDescriptor>,
    initial: OnceCell<InitialConditions>,
    properties: OnceCell<FluidProperties>,
    turbulence: OnceCell<TurbulenceState>,
}

fn solid_region(region: &str, what: &str) -> BcsError {
    BcsError::Property(
        ErrorInfo::new("unsupported-phase", format!("{what} requested for a solid region"))
            .with_context("region", region),
    )
}

impl RegionContext {
    /// Creates a context from already resolved parts.
    pub fn new(
        name: impl Into<String>,
        material: Material,
        turbulence_model: TurbulenceModel,
        boundaries: Vec<BoundaryDescriptor>,
    ) -> Self {
        Self {
            name: name.into(),
            material,
            turbulence_model,
            boundaries,
            initial: OnceCell::new(),
            properties: OnceCell::new(),
            turbulence: OnceCell::new(),
        }
    }

    /// Reads the region's material, the case turbulence model and the
    /// boundary catalog.
    pub fn load(config: &dyn ConfigAccessor, name: &str) -> Result<Self, BcsError> {
        let material = Material::for_region(config, name)?;
        let turbulence_model: TurbulenceModel = get_enum(config, paths::TURBULENCE_MODEL)?;
        let boundaries = load_catalog(config, name)?;
        Ok(Self::new(name, material, turbulence_model, boundaries))
    }

    /// Returns true when the region's material is a liquid or a gas.
    pub fn is_fluid(&self) -> bool {
        self.material.phase.is_fluid()
    }

    fn initial_path(&self, leaf: &str) -> String {
        format!("{}/{leaf}", paths::initial_values(&self.name))
    }

    /// Initial temperature; defined for solid and fluid regions.
    pub fn initial_temperature(
        &self,
        config: &dyn ConfigAccessor,
    ) -> Result<DimensionedValue, BcsError> {
        let value = config.get_f64(&self.initial_path("temperature"))?;
        Ok(DimensionedValue::scalar(value, Dimension::TEMPERATURE))
    }

    /// Initial state of a fluid region.
    pub fn initial_conditions(
        &self,
        config: &dyn ConfigAccessor,
    ) -> Result<&InitialConditions, BcsError> {
        if !self.is_fluid() {
            return Err(solid_region(&self.name, "initial flow state"));
        }
        self.initial.get_or_try_init(|| {
            let gauge = config.get_f64(&self.initial_path("pressure"))?;
            let operating = config.get_f64(paths::OPERATING_PRESSURE)?;
            Ok(InitialConditions {
                pressure: DimensionedValue::scalar(gauge + operating, Dimension::PRESSURE),
                temperature: self.initial_temperature(config)?,
                velocity: DimensionedValue::vector(
                    config.get_vector(&self.initial_path("velocity"))?,
                    Dimension::VELOCITY,
                ),
            })
        })
    }

    /// Fluid properties at the initial state point.
    pub fn fluid_properties(&self, cx: &BuildContext<'_>) -> Result<&FluidProperties, BcsError> {
        if !self.is_fluid() {
            return Err(solid_region(&self.name, "fluid properties"));
        }
        self.properties.get_or_try_init(|| {
            let initial = self.initial_conditions(cx.config)?;
            let pressure = initial.pressure.as_scalar().unwrap_or_default();
            let temperature = initial.temperature.as_scalar().unwrap_or_default();
            cx.resolver.resolve(&self.material, pressure, temperature)
        })
    }

    /// Initial turbulence quantities of the region.
    pub fn turbulence(&self, cx: &BuildContext<'_>) -> Result<&TurbulenceState, BcsError> {
        self.turbulence.get_or_try_init(|| {
            let nu = self.fluid_properties(cx)?.kinematic_viscosity()?;
            let inputs = TurbulenceInputs {
                velocity: cx.config.get_f64(&self.initial_path("scaleOfVelocity"))?,
                intensity: cx.config.get_f64(&self.initial_path("turbulentIntensity"))? / 100.0,
                viscosity_ratio: cx.config.get_f64(&self.initial_path("turbulentViscosity"))?,
            };
            let state = TurbulenceState::derive(inputs, &nu)?;
            debug!(region = %self.name, ?inputs, "derived initial turbulence");
            Ok(state)
        })
    }

    /// Initial value of `field`, the same value on every call within a pass.
    pub fn derived_initial(
        &self,
        cx: &BuildContext<'_>,
        field: FieldName,
    ) -> Result<DimensionedValue, BcsError> {
        match field {
            FieldName::T => self.initial_temperature(cx.config),
            FieldName::U => Ok(self.initial_conditions(cx.config)?.velocity.clone()),
            FieldName::P => Ok(self.initial_conditions(cx.config)?.pressure.clone()),
            FieldName::K
            | FieldName::Epsilon
            | FieldName::Omega
            | FieldName::NuTilda
            | FieldName::Nut => {
                let state = self.turbulence(cx)?;
                state.get(field).cloned().ok_or_else(|| {
                    BcsError::Dispatch(
                        ErrorInfo::new("unknown-derivation", "no derived value for field")
                            .with_context("field", field.as_str()),
                    )
                })
            }
        }
    }

    /// Turbulence values derived so far in this pass.
    pub fn derived_initial_values(&self) -> BTreeMap<FieldName, DimensionedValue> {
        let Some(state) = self.turbulence.get() else {
            return BTreeMap::new();
        };
        [
            FieldName::K,
            FieldName::Epsilon,
            FieldName::Omega,
            FieldName::NuTilda,
            FieldName::Nut,
        ]
        .into_iter()
        .filter_map(|field| state.get(field).map(|value| (field, value.clone())))
        .collect()
    }
}
