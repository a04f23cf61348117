use std::collections::BTreeMap;

use bcs_core::{BcsError, ErrorInfo};
use serde::{Deserialize, Serialize};

/// Universal gas constant `[J/(mol K)]`.
pub const GAS_CONSTANT: f64 = 8.314_462_618;

/// Density and dynamic viscosity evaluated at one state point, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    /// Density `[kg/m^3]`.
    pub density: f64,
    /// Dynamic viscosity `[Pa s]`.
    pub viscosity: f64,
}

/// Contract of the external equation-of-state provider.
pub trait EquationOfState: Send + Sync {
    /// Evaluates the material known as `key` at absolute `pressure` `[Pa]` and
    /// `temperature` `[K]`.
    fn evaluate(&self, key: &str, pressure: f64, temperature: f64) -> Result<StatePoint, BcsError>;
}

/// Inclusive validity window of a property model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateRange {
    /// Lowest temperature `[K]`.
    pub t_min: f64,
    /// Highest temperature `[K]`.
    pub t_max: f64,
    /// Lowest absolute pressure `[Pa]`.
    pub p_min: f64,
    /// Highest absolute pressure `[Pa]`.
    pub p_max: f64,
}

impl StateRange {
    /// Returns whether the state point lies inside the window.
    pub fn contains(&self, pressure: f64, temperature: f64) -> bool {
        temperature >= self.t_min
            && temperature <= self.t_max
            && pressure >= self.p_min
            && pressure <= self.p_max
    }
}

/// Sutherland viscosity law coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sutherland {
    /// Reference viscosity `[Pa s]`.
    pub mu_ref: f64,
    /// Reference temperature `[K]`.
    pub t_ref: f64,
    /// Sutherland temperature `[K]`.
    pub s: f64,
}

impl Sutherland {
    /// Viscosity at `temperature`.
    pub fn viscosity(&self, temperature: f64) -> f64 {
        self.mu_ref * (temperature / self.t_ref).powf(1.5) * (self.t_ref + self.s)
            / (temperature + self.s)
    }
}

/// Property model attached to one material key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "camelCase")]
pub enum MaterialModel {
    /// Perfect gas density with Sutherland viscosity.
    IdealGas {
        /// Molar mass `[kg/mol]`.
        molar_mass: f64,
        /// Viscosity law.
        sutherland: Sutherland,
        /// Validity window.
        range: StateRange,
    },
    /// Liquid water: Thiesen density and Vogel viscosity correlations.
    LiquidWater {
        /// Validity window.
        range: StateRange,
    },
    /// Constant density and viscosity.
    Constant {
        /// Density `[kg/m^3]`.
        density: f64,
        /// Dynamic viscosity `[Pa s]`.
        viscosity: f64,
        /// Validity window.
        range: StateRange,
    },
}

impl MaterialModel {
    /// Validity window of the model.
    pub fn range(&self) -> &StateRange {
        match self {
            MaterialModel::IdealGas { range, .. }
            | MaterialModel::LiquidWater { range }
            | MaterialModel::Constant { range, .. } => range,
        }
    }

    fn evaluate(&self, pressure: f64, temperature: f64) -> StatePoint {
        match self {
            MaterialModel::IdealGas {
                molar_mass,
                sutherland,
                ..
            } => StatePoint {
                density: pressure * molar_mass / (GAS_CONSTANT * temperature),
                viscosity: sutherland.viscosity(temperature),
            },
            MaterialModel::LiquidWater { .. } => {
                let theta = temperature - 273.15;
                let density = 1000.0
                    * (1.0
                        - (theta + 288.9414) / (508_929.2 * (theta + 68.129_63))
                            * (theta - 3.9863).powi(2));
                let viscosity = 2.414e-5 * 10f64.powf(247.8 / (temperature - 140.0));
                StatePoint { density, viscosity }
            }
            MaterialModel::Constant {
                density, viscosity, ..
            } => StatePoint {
                density: *density,
                viscosity: *viscosity,
            },
        }
    }
}

const GAS_RANGE: StateRange = StateRange {
    t_min: 150.0,
    t_max: 1500.0,
    p_min: 1.0,
    p_max: 1.0e7,
};

/// In-process property library keyed by material name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyLibrary {
    models: BTreeMap<String, MaterialModel>,
}

impl PropertyLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Library preloaded with common gases and liquid water.
    pub fn builtin() -> Self {
        let gas = |molar_mass: f64, mu_ref: f64, s: f64, t_min: f64| MaterialModel::IdealGas {
            molar_mass,
            sutherland: Sutherland {
                mu_ref,
                t_ref: 273.15,
                s,
            },
            range: StateRange { t_min, ..GAS_RANGE },
        };
        Self::new()
            .with_material("Air", gas(0.028_964_7, 1.716e-5, 110.4, 150.0))
            .with_material("Nitrogen", gas(0.028_013_4, 1.663e-5, 106.7, 150.0))
            .with_material("Oxygen", gas(0.031_998_8, 1.919e-5, 139.0, 150.0))
            .with_material("CarbonDioxide", gas(0.044_009_5, 1.370e-5, 222.0, 220.0))
            .with_material(
                "Water",
                MaterialModel::LiquidWater {
                    range: StateRange {
                        t_min: 273.16,
                        t_max: 373.0,
                        p_min: 1.0e3,
                        p_max: 1.0e8,
                    },
                },
            )
    }

    /// Registers (or replaces) the model for `key`.
    pub fn with_material(mut self, key: impl Into<String>, model: MaterialModel) -> Self {
        self.models.insert(key.into(), model);
        self
    }

    /// Returns the model registered for `key`.
    pub fn model(&self, key: &str) -> Option<&MaterialModel> {
        self.models.get(key)
    }
}

impl EquationOfState for PropertyLibrary {
    fn evaluate(&self, key: &str, pressure: f64, temperature: f64) -> Result<StatePoint, BcsError> {
        let model = self.models.get(key).ok_or_else(|| {
            BcsError::Property(
                ErrorInfo::new("unknown-material", "no property model for material")
                    .with_context("material", key),
            )
        })?;
        if !model.range().contains(pressure, temperature) {
            return Err(BcsError::Property(
                ErrorInfo::new("state-out-of-range", "state point outside the model range")
                    .with_context("material", key)
                    .with_context("pressure", pressure.to_string())
                    .with_context("temperature", temperature.to_string()),
            ));
        }
        Ok(model.evaluate(pressure, temperature))
    }
}
