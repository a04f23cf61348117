use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use bcs_core::CaseStore;
use bcs_fields::{synthesize, CaseReport, FieldRegistry, SynthesisOptions};
use bcs_thermo::PropertyLibrary;

pub mod check;
pub mod synth;

/// Loads the case at `case`, applies the optional options file and runs one
/// pass against the built-in property library.
pub(crate) fn run_pass(case: &Path, options: Option<&PathBuf>) -> Result<CaseReport, Box<dyn Error>> {
    let store = CaseStore::from_yaml_slice(&fs::read(case)?)?;
    let options = match options {
        Some(path) => SynthesisOptions::from_yaml_slice(&fs::read(path)?)?,
        None => SynthesisOptions::default(),
    };
    let registry = FieldRegistry::standard()?;
    let library = PropertyLibrary::builtin();
    Ok(synthesize(&registry, &store, &library, &options)?)
}
