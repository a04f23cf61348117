#![deny(missing_docs)]
#![doc = "Boundary and initial field synthesis for multi-region CFD cases."]

/// Case-level assembly of field specifications.
pub mod assembler;
/// Field builder contract and build pass context.
pub mod builder;
/// Physical types, sub-model selectors and the boundary catalog.
pub mod catalog;
pub mod constant;
pub mod dispatch;
pub mod entry;
pub mod export;
pub mod field;
pub mod fields;
pub mod region;
pub mod synth;
pub mod turbulence;

pub use assembler::{assemble, CaseFieldSet, Marker, RegionFields};
pub use builder::{BuildContext, FieldBuilder};
pub use catalog::{
    load_catalog, BoundaryDescriptor, FlowRateSpecification, InterfaceMode, KEpsilonSpecification,
    KOmegaSpecification, PhysicalType, SpalartAllmarasSpecification, TemperatureProfile,
    TemporalSpecification, TurbulenceModel, VelocityProfile, VelocitySpecification,
    WallTemperatureCondition, WallVelocityCondition,
};
pub use constant::{MrfZone, OperatingConditions, RegionConstants};
pub use dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder, Handler};
pub use entry::{Blending, BoundaryEntry, EntryKind, FlowRate, HeatFluxMode, ThermoMethod};
pub use export::{export_case, ExportManifest, RegionManifest};
pub use field::{FieldName, FieldSpecification};
pub use region::{InitialConditions, RegionContext};
pub use synth::{synthesize, BuildFailure, CaseReport, FieldRegistry, SynthesisOptions};
pub use turbulence::{TurbulenceInputs, TurbulenceState};
