use bcs_core::{BcsError, DimensionedValue};

use crate::builder::FieldBuilder;
use crate::catalog::{PhysicalType, TurbulenceModel};
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, EntryKind};
use crate::field::FieldName;
use crate::region::RegionContext;

use super::shared::{
    calculated_backflow, cyclic, cyclic_ami, free_stream_turbulence, register_geometric,
    two_equation_spec, two_equation_subtree, zero_gradient, InletSpecification,
};

type Entry = Result<BoundaryEntry, BcsError>;

const KINDS: &[EntryKind] = &[
    EntryKind::InletOutlet,
    EntryKind::TurbulentIntensityKineticEnergyInlet,
    EntryKind::ZeroGradient,
    EntryKind::Freestream,
    EntryKind::KqRWallFunction,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Turbulent kinetic energy, shared by both two-equation models.
///
/// Inlet values are read from the subtree of whichever model is active.
#[derive(Debug)]
pub struct TurbulentKineticEnergy {
    table: DispatchTable,
}

impl TurbulentKineticEnergy {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::K)
            .register_all(
                &[
                    PhysicalType::VelocityInlet,
                    PhysicalType::FlowRateInlet,
                    PhysicalType::PressureInlet,
                    PhysicalType::OpenChannelInlet,
                    PhysicalType::OpenChannelOutlet,
                    PhysicalType::FarFieldRiemann,
                    PhysicalType::SubsonicInflow,
                    PhysicalType::SupersonicInflow,
                ],
                inlet,
            )
            .register(PhysicalType::PressureOutlet, pressure_outlet)
            .register(PhysicalType::AblInlet, direct_inlet)
            .register_all(
                &[
                    PhysicalType::Outflow,
                    PhysicalType::SubsonicOutflow,
                    PhysicalType::SupersonicOutflow,
                ],
                zero_gradient,
            )
            .register(PhysicalType::FreeStream, free_stream)
            .register_all(
                &[PhysicalType::Wall, PhysicalType::ThermoCoupledWall],
                wall_function,
            )
            .register_interface(wall_function, cyclic_ami)
            .register_all(
                &[PhysicalType::PorousJump, PhysicalType::Fan, PhysicalType::Cyclic],
                cyclic,
            );
        Ok(Self {
            table: register_geometric(builder).build()?,
        })
    }
}

impl FieldBuilder for TurbulentKineticEnergy {
    fn field(&self) -> FieldName {
        FieldName::K
    }

    fn supported_kinds(&self) -> &'static [EntryKind] {
        KINDS
    }

    fn is_active(&self, region: &RegionContext) -> bool {
        region.is_fluid()
            && matches!(
                region.turbulence_model,
                TurbulenceModel::KEpsilon | TurbulenceModel::KOmega
            )
    }

    fn table(&self) -> &DispatchTable {
        &self.table
    }
}

fn direct_value(scope: &BoundaryScope<'_>, subtree: &str) -> Result<DimensionedValue, BcsError> {
    Ok(scope.scalar(scope.f64(&format!("{subtree}/turbulentKineticEnergy"))?))
}

fn direct_inlet(scope: &BoundaryScope<'_>) -> Entry {
    let subtree = two_equation_subtree(scope.region.turbulence_model);
    Ok(BoundaryEntry::InletOutlet {
        inlet_value: direct_value(scope, subtree)?,
        value: scope.initial()?,
    })
}

fn inlet(scope: &BoundaryScope<'_>) -> Entry {
    let (subtree, specification) = two_equation_spec(scope)?;
    match specification {
        InletSpecification::Direct => Ok(BoundaryEntry::InletOutlet {
            inlet_value: direct_value(scope, subtree)?,
            value: scope.initial()?,
        }),
        InletSpecification::IntensityAndViscosityRatio => {
            Ok(BoundaryEntry::TurbulentIntensityKineticEnergyInlet {
                intensity: scope.f64(&format!("{subtree}/turbulentIntensity"))? / 100.0,
                value: scope.initial()?,
            })
        }
    }
}

fn pressure_outlet(scope: &BoundaryScope<'_>) -> Entry {
    if calculated_backflow(scope)? {
        inlet(scope)
    } else {
        Ok(BoundaryEntry::ZeroGradient)
    }
}

fn free_stream(scope: &BoundaryScope<'_>) -> Entry {
    let (subtree, specification) = two_equation_spec(scope)?;
    let freestream_value = match specification {
        InletSpecification::Direct => direct_value(scope, subtree)?,
        InletSpecification::IntensityAndViscosityRatio => {
            free_stream_turbulence(scope, subtree)?.k
        }
    };
    Ok(BoundaryEntry::Freestream { freestream_value })
}

fn wall_function(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::KqRWallFunction {
        value: scope.initial()?,
    })
}
