//! Build pass driver: every active field of every region of a case.

use bcs_core::{BcsError, ConfigAccessor, ErrorInfo};
use bcs_thermo::EquationOfState;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assembler::{CaseFieldSet, Marker};
use crate::builder::{BuildContext, FieldBuilder};
use crate::constant::RegionConstants;
use crate::field::{FieldName, FieldSpecification};
use crate::fields::{
    Epsilon, NuTilda, Omega, Pressure, Temperature, TurbulentKineticEnergy, TurbulentViscosity,
    Velocity,
};
use crate::region::RegionContext;

/// Options governing a build pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SynthesisOptions {
    /// Evaluate (region, field) jobs on a thread pool.
    pub parallel: bool,
    /// Pool size when `parallel` is set; 0 lets rayon decide.
    pub threads: usize,
    /// Stop at the first failing region or field.
    pub fail_fast: bool,
    /// Restrict the pass to these fields; empty means every field.
    pub fields: Vec<FieldName>,
}

impl SynthesisOptions {
    /// Parses options from YAML; absent keys keep their defaults.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, BcsError> {
        bcs_core::serde::from_yaml_slice(data)
    }

    fn wants(&self, field: FieldName) -> bool {
        self.fields.is_empty() || self.fields.contains(&field)
    }
}

/// The builders of a pass, in canonical field order.
pub struct FieldRegistry {
    builders: Vec<Box<dyn FieldBuilder>>,
}

impl std::fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.builders.iter().map(|builder| builder.field()))
            .finish()
    }
}

impl FieldRegistry {
    /// Registry holding one builder per [`FieldName`].
    ///
    /// Fails when any builder's dispatch table is incomplete.
    pub fn standard() -> Result<Self, BcsError> {
        Ok(Self {
            builders: vec![
                Box::new(Temperature::new()?),
                Box::new(Velocity::new()?),
                Box::new(Pressure::new()?),
                Box::new(TurbulentKineticEnergy::new()?),
                Box::new(Epsilon::new()?),
                Box::new(Omega::new()?),
                Box::new(NuTilda::new()?),
                Box::new(TurbulentViscosity::new()?),
            ],
        })
    }

    /// Every builder in field order.
    pub fn builders(&self) -> impl Iterator<Item = &dyn FieldBuilder> {
        self.builders.iter().map(|builder| builder.as_ref())
    }

    /// Builder of `field`.
    pub fn get(&self, field: FieldName) -> Option<&dyn FieldBuilder> {
        self.builders().find(|builder| builder.field() == field)
    }
}

/// A region or field that could not be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildFailure {
    /// Region concerned.
    pub region: String,
    /// Field concerned; `None` when the region itself failed to load.
    pub field: Option<FieldName>,
    /// Cause.
    pub error: BcsError,
}

/// Outcome of a build pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Fields that were built.
    pub fields: CaseFieldSet,
    /// Failures in job order.
    pub failures: Vec<BuildFailure>,
}

impl CaseReport {
    /// True when nothing failed and no marker entry was produced.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.fields.is_ready()
    }

    /// Unsupported-marker entries of the built fields.
    pub fn markers(&self) -> Vec<Marker> {
        self.fields.markers()
    }
}

fn thread_pool_error(threads: usize, err: impl std::fmt::Display) -> BcsError {
    BcsError::Dispatch(
        ErrorInfo::new("thread-pool-unavailable", "could not start the synthesis thread pool")
            .with_context("threads", threads.to_string())
            .with_context("cause", err.to_string()),
    )
}

struct Job {
    region: usize,
    builder: usize,
}

/// Runs one build pass over every region of `config`.
///
/// Jobs are independent; with `parallel` set they run on a rayon pool and are
/// re-ordered by job index, so output matches the sequential pass.
pub fn synthesize(
    registry: &FieldRegistry,
    config: &dyn ConfigAccessor,
    provider: &dyn EquationOfState,
    options: &SynthesisOptions,
) -> Result<CaseReport, BcsError> {
    let cx = BuildContext::new(config, provider);
    let mut report = CaseReport::default();

    let mut regions = Vec::new();
    for name in config.region_names()? {
        let loaded = RegionContext::load(config, &name)
            .and_then(|region| RegionConstants::load(config, &region).map(|c| (region, c)));
        match loaded {
            Ok((region, constants)) => {
                report.fields.set_constants(&region.name, constants);
                regions.push(region);
            }
            Err(error) if options.fail_fast => return Err(error),
            Err(error) => {
                warn!(region = %name, %error, "region failed to load");
                report.failures.push(BuildFailure {
                    region: name,
                    field: None,
                    error,
                });
            }
        }
    }

    let builders: Vec<&dyn FieldBuilder> = registry.builders().collect();
    let mut jobs = Vec::with_capacity(regions.len() * builders.len());
    for region in 0..regions.len() {
        for (builder, field_builder) in builders.iter().enumerate() {
            if options.wants(field_builder.field()) {
                jobs.push(Job { region, builder });
            }
        }
    }

    let run = |job: &Job| -> Result<Option<FieldSpecification>, BcsError> {
        builders[job.builder].build(&cx, &regions[job.region])
    };

    let results: Vec<Result<Option<FieldSpecification>, BcsError>> = if options.parallel {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.threads)
            .build()
            .map_err(|err| thread_pool_error(options.threads, err))?;
        let mut ordered: Vec<(usize, _)> = pool.install(|| {
            jobs.par_iter()
                .enumerate()
                .map(|(index, job)| (index, run(job)))
                .collect()
        });
        ordered.sort_by_key(|(index, _)| *index);
        ordered.into_iter().map(|(_, result)| result).collect()
    } else {
        jobs.iter().map(run).collect()
    };

    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(Some(specification)) => report.fields.insert(specification)?,
            Ok(None) => {}
            Err(error) if options.fail_fast => return Err(error),
            Err(error) => {
                let region = regions[job.region].name.clone();
                let field = builders[job.builder].field();
                warn!(%region, %field, %error, "field failed");
                report.failures.push(BuildFailure {
                    region,
                    field: Some(field),
                    error,
                });
            }
        }
    }

    info!(
        regions = regions.len(),
        fields = report.fields.specifications().count(),
        markers = report.markers().len(),
        failures = report.failures.len(),
        "synthesis pass complete"
    );
    Ok(report)
}
