use std::fmt;
use std::str::FromStr;

use bcs_core::{get_enum, paths, BcsError, ConfigAccessor};
use serde::{Deserialize, Serialize};

/// Phase of a material as declared in the material database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Solid: conducts heat only, never reaches viscosity based derivations.
    Solid,
    /// Liquid.
    Liquid,
    /// Gas.
    Gas,
}

impl Phase {
    /// Returns true for liquids and gases.
    pub fn is_fluid(&self) -> bool {
        matches!(self, Phase::Liquid | Phase::Gas)
    }

    /// Configuration tag of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Solid => "solid",
            Phase::Liquid => "liquid",
            Phase::Gas => "gas",
        }
    }
}

impl FromStr for Phase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Phase::Solid),
            "liquid" => Ok(Phase::Liquid),
            "gas" => Ok(Phase::Gas),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Material assigned to a region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Material identifier in the configuration store.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declared phase.
    pub phase: Phase,
    /// Key under which the equation-of-state provider knows the material.
    ///
    /// Solids usually have none.
    pub property_key: Option<String>,
}

impl Material {
    /// Reads the material with identifier `id` from the configuration.
    pub fn load(config: &dyn ConfigAccessor, id: &str) -> Result<Self, BcsError> {
        let root = paths::material(id);
        let name = config.get_value(&format!("{root}/name"))?;
        let phase: Phase = get_enum(config, &format!("{root}/phase"))?;
        let key_path = format!("{root}/propertyKey");
        let property_key = if phase.is_fluid() || config.contains(&key_path) {
            Some(config.get_value(&key_path)?)
        } else {
            None
        };
        Ok(Self {
            id: id.to_string(),
            name,
            phase,
            property_key,
        })
    }

    /// Reads the material assigned to `region`.
    pub fn for_region(config: &dyn ConfigAccessor, region: &str) -> Result<Self, BcsError> {
        let id = config.get_value(&paths::region_material(region))?;
        Self::load(config, &id)
    }
}
