//! Read-only access to the case configuration store.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::BcsError;

/// Boundary listing entry returned by [`ConfigAccessor::get_boundary_conditions`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryRecord {
    /// Identifier unique within the region.
    pub id: u64,
    /// Patch name used as the key of the emitted boundary field.
    pub name: String,
    /// Raw physical type tag as stored in the configuration.
    pub physical_type: String,
}

/// Contract of the external case configuration store.
///
/// Paths are slash separated (`regions/fluid/material`). Implementations must
/// fail with a `path-not-found` configuration error for absent paths and must
/// not mutate state while a build pass holds the accessor.
pub trait ConfigAccessor: Send + Sync {
    /// Returns the raw string stored at `path`.
    fn get_value(&self, path: &str) -> Result<String, BcsError>;

    /// Returns the three-component vector stored at `path`.
    fn get_vector(&self, path: &str) -> Result<[f64; 3], BcsError>;

    /// Returns the boundaries of `region` in declaration order.
    fn get_boundary_conditions(&self, region: &str) -> Result<Vec<BoundaryRecord>, BcsError>;

    /// Returns the identifiers of every cell zone of `zone_type` in `region`.
    fn get_cell_zones_by_type(&self, region: &str, zone_type: &str) -> Result<Vec<u64>, BcsError>;

    /// Returns every region name in declaration order.
    fn region_names(&self) -> Result<Vec<String>, BcsError>;

    /// Returns true when `path` holds a value.
    fn contains(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    /// Parses the value at `path` as a float.
    fn get_f64(&self, path: &str) -> Result<f64, BcsError> {
        let raw = self.get_value(path)?;
        parse_finite(&raw).ok_or_else(|| BcsError::invalid_value(path, &raw, "a finite number"))
    }

    /// Parses the value at `path` as a `true`/`false` flag.
    fn get_bool(&self, path: &str) -> Result<bool, BcsError> {
        let raw = self.get_value(path)?;
        match raw.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(BcsError::invalid_value(path, &raw, "true or false")),
        }
    }

    /// Parses the whitespace separated numbers stored at `path`.
    fn get_list(&self, path: &str) -> Result<Vec<f64>, BcsError> {
        let raw = self.get_value(path)?;
        raw.split_whitespace()
            .map(|item| {
                parse_finite(item)
                    .ok_or_else(|| BcsError::invalid_value(path, &raw, "a list of finite numbers"))
            })
            .collect()
    }
}

/// Parses `raw` as a float, refusing `NaN` and the infinities.
pub(crate) fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parses the value at `path` into a closed configuration enum.
pub fn get_enum<T: FromStr>(config: &dyn ConfigAccessor, path: &str) -> Result<T, BcsError> {
    let raw = config.get_value(path)?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| BcsError::invalid_value(path, &raw, std::any::type_name::<T>()))
}

/// Canonical configuration paths.
pub mod paths {
    /// Operating (reference) pressure added to every gauge pressure.
    pub const OPERATING_PRESSURE: &str = "operatingConditions/pressure";
    /// Active turbulence model.
    pub const TURBULENCE_MODEL: &str = "models/turbulenceModels/model";
    /// Atmospheric boundary layer settings shared by every ABL inlet.
    pub const ABL: &str = "abl";

    /// Root of a region subtree.
    pub fn region(region: &str) -> String {
        format!("regions/{region}")
    }

    /// Material identifier of a region.
    pub fn region_material(region: &str) -> String {
        format!("regions/{region}/material")
    }

    /// Initial values of a region.
    pub fn initial_values(region: &str) -> String {
        format!("regions/{region}/initialization/initialValues")
    }

    /// Subtree of one boundary.
    pub fn boundary(region: &str, id: u64) -> String {
        format!("regions/{region}/boundaryConditions/{id}")
    }

    /// Subtree of one cell zone.
    pub fn cell_zone(region: &str, id: u64) -> String {
        format!("regions/{region}/cellZones/{id}")
    }

    /// Subtree of one material.
    pub fn material(id: &str) -> String {
        format!("materials/{id}")
    }
}
