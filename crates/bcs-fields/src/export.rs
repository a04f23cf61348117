//! Writes a case report to disk, one JSON document per region and field.

use std::fs;
use std::path::{Path, PathBuf};

use bcs_core::serde::{to_canonical_json_bytes, to_json_bytes};
use bcs_core::{BcsError, ErrorInfo};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assembler::Marker;
use crate::field::FieldName;
use crate::synth::{BuildFailure, CaseReport};

/// Directory holding the initial and boundary fields of a region.
pub const FIELDS_DIR: &str = "0";
/// Directory holding the constants of a region.
pub const CONSTANT_DIR: &str = "constant";
/// Manifest file name at the export root.
pub const MANIFEST_FILE: &str = "manifest.json";

fn io_error(code: &str, err: impl ToString) -> BcsError {
    BcsError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Files written for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionManifest {
    /// Region name.
    pub name: String,
    /// Exported fields in build order.
    pub fields: Vec<FieldName>,
    /// Exported constant documents.
    pub constants: Vec<String>,
}

/// Summary written next to the exported documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportManifest {
    /// Digest of the exported field set.
    pub digest: String,
    /// Regions in declaration order.
    pub regions: Vec<RegionManifest>,
    /// Unsupported-marker entries.
    pub markers: Vec<Marker>,
    /// Regions and fields that failed to build.
    pub failures: Vec<BuildFailure>,
}

fn write_bytes(path: PathBuf, bytes: Vec<u8>) -> Result<(), BcsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| io_error("export-dir", err))?;
    }
    fs::write(path, bytes).map_err(|err| io_error("export-write", err))
}

/// Exports `report` below `out` and returns the manifest that was written.
///
/// Field documents keep boundaries in catalog order; the manifest is canonical
/// JSON.
pub fn export_case(report: &CaseReport, out: &Path) -> Result<ExportManifest, BcsError> {
    fs::create_dir_all(out).map_err(|err| io_error("export-dir", err))?;
    let mut regions = Vec::with_capacity(report.fields.regions.len());
    for (name, region) in &report.fields.regions {
        let root = out.join(name);
        for (field, specification) in &region.fields {
            let path = root.join(FIELDS_DIR).join(format!("{field}.json"));
            write_bytes(path, to_json_bytes(specification)?)?;
        }
        let mut constants = Vec::new();
        if let Some(conditions) = &region.constants.operating_conditions {
            write_bytes(
                root.join(CONSTANT_DIR).join("operatingConditions.json"),
                to_json_bytes(conditions)?,
            )?;
            constants.push("operatingConditions".to_string());
        }
        if !region.constants.mrf.is_empty() {
            write_bytes(
                root.join(CONSTANT_DIR).join("MRFProperties.json"),
                to_json_bytes(&region.constants.mrf)?,
            )?;
            constants.push("MRFProperties".to_string());
        }
        regions.push(RegionManifest {
            name: name.clone(),
            fields: region.fields.keys().copied().collect(),
            constants,
        });
    }

    let manifest = ExportManifest {
        digest: report.fields.digest()?,
        regions,
        markers: report.markers(),
        failures: report.failures.clone(),
    };
    write_bytes(out.join(MANIFEST_FILE), to_canonical_json_bytes(&manifest)?)?;
    info!(out = %out.display(), digest = %manifest.digest, "case exported");
    Ok(manifest)
}
