use bcs_core::{BcsError, DimensionedValue};

use crate::builder::FieldBuilder;
use crate::catalog::{KEpsilonSpecification, PhysicalType, TurbulenceModel};
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, EntryKind};
use crate::field::FieldName;
use crate::region::RegionContext;

use super::shared::{
    calculated_backflow, cyclic, cyclic_ami, free_stream_turbulence, register_geometric,
    zero_gradient,
};

type Entry = Result<BoundaryEntry, BcsError>;

const SUBTREE: &str = "turbulence/k-epsilon";

const KINDS: &[EntryKind] = &[
    EntryKind::InletOutlet,
    EntryKind::ViscosityRatioInletOutletTdr,
    EntryKind::ZeroGradient,
    EntryKind::Freestream,
    EntryKind::EpsilonWallFunction,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Turbulent dissipation rate, active under k-epsilon.
#[derive(Debug)]
pub struct Epsilon {
    table: DispatchTable,
}

impl Epsilon {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::Epsilon)
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

impl FieldBuilder for Epsilon {
    fn field(&self) -> FieldName {
        FieldName::Epsilon
    }

    fn supported_kinds(&self) -> &'static [EntryKind] {
        KINDS
    }

    fn is_active(&self, region: &RegionContext) -> bool {
        region.is_fluid() && region.turbulence_model == TurbulenceModel::KEpsilon
    }

    fn table(&self) -> &DispatchTable {
        &self.table
    }
}

fn specification(scope: &BoundaryScope<'_>) -> Result<KEpsilonSpecification, BcsError> {
    scope.select(&format!("{SUBTREE}/specification"))
}

fn direct_value(scope: &BoundaryScope<'_>) -> Result<DimensionedValue, BcsError> {
    Ok(scope.scalar(scope.f64(&format!("{SUBTREE}/energyDissipationRate"))?))
}

fn direct_inlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::InletOutlet {
        inlet_value: direct_value(scope)?,
        value: scope.initial()?,
    })
}

fn inlet(scope: &BoundaryScope<'_>) -> Entry {
    match specification(scope)? {
        KEpsilonSpecification::KAndEpsilon => direct_inlet(scope),
        KEpsilonSpecification::IntensityAndViscosityRatio => {
            Ok(BoundaryEntry::ViscosityRatioInletOutletTdr {
                viscosity_ratio: scope.f64(&format!("{SUBTREE}/turbulentViscosityRatio"))?,
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
    let freestream_value = match specification(scope)? {
        KEpsilonSpecification::KAndEpsilon => direct_value(scope)?,
        KEpsilonSpecification::IntensityAndViscosityRatio => {
            free_stream_turbulence(scope, SUBTREE)?.epsilon
        }
    };
    Ok(BoundaryEntry::Freestream { freestream_value })
}

fn wall_function(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::EpsilonWallFunction {
        value: scope.initial()?,
    })
}
