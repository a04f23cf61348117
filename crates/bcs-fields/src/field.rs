//! Field names and the per-field specification record.

use std::fmt;
use std::str::FromStr;

use bcs_core::{BcsError, Dimension, DimensionedValue, ErrorInfo};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::entry::BoundaryEntry;

/// Solver field produced by the synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    /// Temperature.
    #[serde(rename = "T")]
    T,
    /// Velocity.
    #[serde(rename = "U")]
    U,
    /// Absolute pressure.
    #[serde(rename = "p")]
    P,
    /// Turbulent kinetic energy.
    #[serde(rename = "k")]
    K,
    /// Turbulent dissipation rate.
    #[serde(rename = "epsilon")]
    Epsilon,
    /// Specific dissipation rate.
    #[serde(rename = "omega")]
    Omega,
    /// Spalart-Allmaras modified viscosity.
    #[serde(rename = "nuTilda")]
    NuTilda,
    /// Turbulent viscosity.
    #[serde(rename = "nut")]
    Nut,
}

impl FieldName {
    /// Every field in canonical build order.
    pub const ALL: [FieldName; 8] = [
        FieldName::T,
        FieldName::U,
        FieldName::P,
        FieldName::K,
        FieldName::Epsilon,
        FieldName::Omega,
        FieldName::NuTilda,
        FieldName::Nut,
    ];

    /// Solver name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::T => "T",
            FieldName::U => "U",
            FieldName::P => "p",
            FieldName::K => "k",
            FieldName::Epsilon => "epsilon",
            FieldName::Omega => "omega",
            FieldName::NuTilda => "nuTilda",
            FieldName::Nut => "nut",
        }
    }

    /// Physical dimension every value of the field carries.
    pub fn dimension(&self) -> Dimension {
        match self {
            FieldName::T => Dimension::TEMPERATURE,
            FieldName::U => Dimension::VELOCITY,
            FieldName::P => Dimension::PRESSURE,
            FieldName::K => Dimension::TURBULENT_KINETIC_ENERGY,
            FieldName::Epsilon => Dimension::DISSIPATION_RATE,
            FieldName::Omega => Dimension::SPECIFIC_DISSIPATION_RATE,
            FieldName::NuTilda | FieldName::Nut => Dimension::KINEMATIC_VISCOSITY,
        }
    }
}

impl FromStr for FieldName {
    type Err = BcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                BcsError::Config(
                    ErrorInfo::new("unknown-field", "not a field name").with_context("field", s),
                )
            })
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete initial and boundary description of one field in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpecification {
    /// Field name.
    pub field: FieldName,
    /// Owning region.
    pub region: String,
    /// Dimension shared by every value of the field.
    pub dimension: Dimension,
    /// Uniform initial value of the interior.
    pub internal_field: DimensionedValue,
    /// One entry per boundary, keyed by patch name in catalog order.
    pub boundary_field: IndexMap<String, BoundaryEntry>,
}

impl FieldSpecification {
    /// Entry of the boundary named `name`.
    pub fn entry(&self, name: &str) -> Option<&BoundaryEntry> {
        self.boundary_field.get(name)
    }

    /// Patch names whose entry is an unsupported marker.
    pub fn markers(&self) -> impl Iterator<Item = (&str, &BoundaryEntry)> {
        self.boundary_field
            .iter()
            .filter(|(_, entry)| entry.is_marker())
            .map(|(name, entry)| (name.as_str(), entry))
    }
}
