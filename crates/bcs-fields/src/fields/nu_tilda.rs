use bcs_core::{BcsError, DimensionedValue};

use crate::builder::FieldBuilder;
use crate::catalog::{PhysicalType, SpalartAllmarasSpecification, TurbulenceModel};
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, EntryKind};
use crate::field::FieldName;
use crate::region::RegionContext;
use crate::turbulence::turbulent_viscosity;

use super::shared::{
    calculated_backflow, cyclic, cyclic_ami, free_stream_viscosity, register_geometric,
    zero_gradient,
};

type Entry = Result<BoundaryEntry, BcsError>;

const SUBTREE: &str = "turbulence/spalartAllmaras";

const RATIO_UNSUPPORTED: &str =
    "turbulent viscosity ratio inlets are not supported for the Spalart-Allmaras model";

const KINDS: &[EntryKind] = &[
    EntryKind::FixedValue,
    EntryKind::InletOutlet,
    EntryKind::ZeroGradient,
    EntryKind::Freestream,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Spalart-Allmaras working variable.
#[derive(Debug)]
pub struct NuTilda {
    table: DispatchTable,
}

impl NuTilda {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::NuTilda)
            .register_all(
                &[
                    PhysicalType::VelocityInlet,
                    PhysicalType::FlowRateInlet,
                    PhysicalType::PressureInlet,
                ],
                fixed_inlet,
            )
            .register_all(
                &[
                    PhysicalType::OpenChannelInlet,
                    PhysicalType::OpenChannelOutlet,
                    PhysicalType::FarFieldRiemann,
                    PhysicalType::SubsonicInflow,
                    PhysicalType::SupersonicInflow,
                ],
                mixed_inlet,
            )
            .register(PhysicalType::PressureOutlet, pressure_outlet)
            .register(PhysicalType::AblInlet, abl_inlet)
            .register(PhysicalType::FreeStream, free_stream)
            .register_all(
                &[
                    PhysicalType::Outflow,
                    PhysicalType::SubsonicOutflow,
                    PhysicalType::SupersonicOutflow,
                    PhysicalType::Wall,
                    PhysicalType::ThermoCoupledWall,
                ],
                zero_gradient,
            )
            .register_interface(zero_gradient, cyclic_ami)
            .register_all(
                &[PhysicalType::PorousJump, PhysicalType::Fan, PhysicalType::Cyclic],
                cyclic,
            );
        Ok(Self {
            table: register_geometric(builder).build()?,
        })
    }
}

impl FieldBuilder for NuTilda {
    fn field(&self) -> FieldName {
        FieldName::NuTilda
    }

    fn supported_kinds(&self) -> &'static [EntryKind] {
        KINDS
    }

    fn is_active(&self, region: &RegionContext) -> bool {
        region.is_fluid() && region.turbulence_model == TurbulenceModel::SpalartAllmaras
    }

    fn table(&self) -> &DispatchTable {
        &self.table
    }
}

fn specification(scope: &BoundaryScope<'_>) -> Result<SpalartAllmarasSpecification, BcsError> {
    scope.select(&format!("{SUBTREE}/specification"))
}

fn modified_viscosity(scope: &BoundaryScope<'_>) -> Result<DimensionedValue, BcsError> {
    Ok(scope.scalar(scope.f64(&format!("{SUBTREE}/modifiedTurbulentViscosity"))?))
}

fn fixed_inlet(scope: &BoundaryScope<'_>) -> Entry {
    match specification(scope)? {
        SpalartAllmarasSpecification::ModifiedTurbulentViscosity => Ok(BoundaryEntry::FixedValue {
            value: modified_viscosity(scope)?,
        }),
        SpalartAllmarasSpecification::TurbulentViscosityRatio => {
            Ok(BoundaryEntry::unsupported(RATIO_UNSUPPORTED))
        }
    }
}

fn mixed_inlet(scope: &BoundaryScope<'_>) -> Entry {
    match specification(scope)? {
        SpalartAllmarasSpecification::ModifiedTurbulentViscosity => {
            Ok(BoundaryEntry::InletOutlet {
                inlet_value: modified_viscosity(scope)?,
                value: scope.initial()?,
            })
        }
        SpalartAllmarasSpecification::TurbulentViscosityRatio => {
            Ok(BoundaryEntry::unsupported(RATIO_UNSUPPORTED))
        }
    }
}

fn pressure_outlet(scope: &BoundaryScope<'_>) -> Entry {
    if calculated_backflow(scope)? {
        mixed_inlet(scope)
    } else {
        Ok(BoundaryEntry::ZeroGradient)
    }
}

fn abl_inlet(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::unsupported(
        "atmospheric boundary layer inlets are not supported for the Spalart-Allmaras model",
    ))
}

fn free_stream(scope: &BoundaryScope<'_>) -> Entry {
    let freestream_value = match specification(scope)? {
        SpalartAllmarasSpecification::ModifiedTurbulentViscosity => modified_viscosity(scope)?,
        SpalartAllmarasSpecification::TurbulentViscosityRatio => {
            let ratio = scope.f64(&format!("{SUBTREE}/turbulentViscosityRatio"))?;
            turbulent_viscosity(ratio, &free_stream_viscosity(scope)?)
        }
    };
    Ok(BoundaryEntry::Freestream { freestream_value })
}
