//! Collects field specifications into the case-level set.

use bcs_core::{stable_hash_string, BcsError, ErrorInfo};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constant::RegionConstants;
use crate::entry::BoundaryEntry;
use crate::field::{FieldName, FieldSpecification};

/// Fields and constants of one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionFields {
    /// Active fields in build order.
    pub fields: IndexMap<FieldName, FieldSpecification>,
    /// Operating conditions and rotating zones.
    #[serde(default)]
    pub constants: RegionConstants,
}

/// One unsupported-marker entry of the case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Region of the boundary.
    pub region: String,
    /// Field holding the marker.
    pub field: FieldName,
    /// Boundary name.
    pub boundary: String,
    /// Why the combination is unsupported.
    pub reason: String,
}

/// Every field specification of a case, grouped by region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseFieldSet {
    /// Regions in declaration order.
    pub regions: IndexMap<String, RegionFields>,
}

/// Groups `specifications` by region; each (region, field) pair may appear once.
pub fn assemble(specifications: Vec<FieldSpecification>) -> Result<CaseFieldSet, BcsError> {
    let mut set = CaseFieldSet::default();
    for specification in specifications {
        set.insert(specification)?;
    }
    Ok(set)
}

impl CaseFieldSet {
    /// Adds one specification; fails on a duplicate (region, field) pair.
    pub fn insert(&mut self, specification: FieldSpecification) -> Result<(), BcsError> {
        let region = self.regions.entry(specification.region.clone()).or_default();
        if region.fields.contains_key(&specification.field) {
            return Err(BcsError::Assembly(
                ErrorInfo::new("duplicate-field", "field built twice for region")
                    .with_context("region", specification.region.as_str())
                    .with_context("field", specification.field.as_str()),
            ));
        }
        region.fields.insert(specification.field, specification);
        Ok(())
    }

    /// Attaches the constants of `region`, creating the region if needed.
    pub fn set_constants(&mut self, region: &str, constants: RegionConstants) {
        self.regions.entry(region.to_string()).or_default().constants = constants;
    }

    /// Specification of `field` in `region`.
    pub fn get(&self, region: &str, field: FieldName) -> Option<&FieldSpecification> {
        self.regions.get(region)?.fields.get(&field)
    }

    /// Every specification, region by region.
    pub fn specifications(&self) -> impl Iterator<Item = &FieldSpecification> {
        self.regions.values().flat_map(|region| region.fields.values())
    }

    /// Every unsupported-marker entry of the case.
    pub fn markers(&self) -> Vec<Marker> {
        self.specifications()
            .flat_map(|specification| {
                specification.markers().filter_map(move |(boundary, entry)| {
                    let BoundaryEntry::Unsupported { reason } = entry else {
                        return None;
                    };
                    Some(Marker {
                        region: specification.region.clone(),
                        field: specification.field,
                        boundary: boundary.to_string(),
                        reason: reason.clone(),
                    })
                })
            })
            .collect()
    }

    /// True when no entry is an unsupported marker.
    pub fn is_ready(&self) -> bool {
        self.specifications()
            .all(|specification| specification.markers().next().is_none())
    }

    /// SHA-256 of the canonical JSON form.
    pub fn digest(&self) -> Result<String, BcsError> {
        stable_hash_string(self)
    }
}
