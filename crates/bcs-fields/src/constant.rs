//! Region constants emitted next to the fields: operating conditions and
//! rotating (MRF) cell zones.

use bcs_core::{paths, BcsError, ConfigAccessor, Dimension, DimensionedValue};
use serde::{Deserialize, Serialize};

use crate::region::RegionContext;

/// Zone type tag of multiple-reference-frame cell zones.
pub const MRF_ZONE_TYPE: &str = "mrf";

/// Angular speed `[rad/s]` of a rotation given in revolutions per minute.
pub(crate) fn rpm_to_rad_per_s(rpm: f64) -> f64 {
    rpm * std::f64::consts::PI / 30.0
}

/// Reference state of a fluid region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingConditions {
    /// Pressure added to every gauge pressure.
    pub operating_pressure: DimensionedValue,
}

/// One rotating cell zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MrfZone {
    /// Key of the zone in the solver dictionary.
    pub name: String,
    /// Cell zone name.
    pub cell_zone: String,
    /// Every declared zone is emitted active.
    pub active: bool,
    /// Boundaries that stay in the absolute frame.
    pub non_rotating_patches: Vec<String>,
    /// Point on the rotation axis.
    pub origin: [f64; 3],
    /// Rotation axis direction.
    pub axis: [f64; 3],
    /// Angular speed `[rad/s]`.
    pub omega: f64,
}

/// Constants of one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionConstants {
    /// Present for fluid regions only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_conditions: Option<OperatingConditions>,
    /// Rotating zones in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mrf: Vec<MrfZone>,
}

impl RegionConstants {
    /// Reads the constants of `region`.
    pub fn load(config: &dyn ConfigAccessor, region: &RegionContext) -> Result<Self, BcsError> {
        if !region.is_fluid() {
            return Ok(Self::default());
        }
        let operating_pressure = DimensionedValue::scalar(
            config.get_f64(paths::OPERATING_PRESSURE)?,
            Dimension::PRESSURE,
        );
        let mrf = config
            .get_cell_zones_by_type(&region.name, MRF_ZONE_TYPE)?
            .into_iter()
            .map(|id| load_mrf_zone(config, region, id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            operating_conditions: Some(OperatingConditions { operating_pressure }),
            mrf,
        })
    }
}

fn load_mrf_zone(
    config: &dyn ConfigAccessor,
    region: &RegionContext,
    id: u64,
) -> Result<MrfZone, BcsError> {
    let root = paths::cell_zone(&region.name, id);
    let cell_zone = config.get_value(&format!("{root}/name"))?;
    let static_path = format!("{root}/mrf/staticBoundaries");
    let non_rotating_patches = if config.contains(&static_path) {
        let raw = config.get_value(&static_path)?;
        raw.split_whitespace()
            .map(|token| {
                let boundary_id = token
                    .parse::<u64>()
                    .map_err(|_| BcsError::invalid_value(&static_path, &raw, "boundary ids"))?;
                region
                    .boundaries
                    .iter()
                    .find(|boundary| boundary.id == boundary_id)
                    .map(|boundary| boundary.name.clone())
                    .ok_or_else(|| {
                        BcsError::invalid_value(&static_path, token, "a boundary of the region")
                    })
            })
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };
    let rpm = config.get_f64(&format!("{root}/mrf/rotatingSpeed"))?;
    Ok(MrfZone {
        name: format!("MRFCellZone_{cell_zone}"),
        cell_zone,
        active: true,
        non_rotating_patches,
        origin: config.get_vector(&format!("{root}/mrf/rotationAxisOrigin"))?,
        axis: config.get_vector(&format!("{root}/mrf/rotationAxisDirection"))?,
        omega: rpm_to_rad_per_s(rpm),
    })
}
