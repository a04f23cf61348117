use bcs_core::BcsError;

use crate::builder::FieldBuilder;
use crate::catalog::{KOmegaSpecification, PhysicalType, TurbulenceModel, WallVelocityCondition};
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{Blending, BoundaryEntry, EntryKind};
use crate::field::FieldName;
use crate::region::RegionContext;

use super::shared::{
    calculated_backflow, cyclic, cyclic_ami, free_stream_turbulence, register_geometric,
    zero_gradient,
};

type Entry = Result<BoundaryEntry, BcsError>;

const SUBTREE: &str = "turbulence/k-omega";

const KINDS: &[EntryKind] = &[
    EntryKind::InletOutlet,
    EntryKind::ViscosityRatioInletOutletTdr,
    EntryKind::ZeroGradient,
    EntryKind::Freestream,
    EntryKind::OmegaWallFunction,
    EntryKind::AtmOmegaWallFunction,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Specific dissipation rate, active under k-omega.
#[derive(Debug)]
pub struct Omega {
    table: DispatchTable,
}

impl Omega {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::Omega)
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
            .register(PhysicalType::Wall, wall)
            .register(PhysicalType::ThermoCoupledWall, blended_wall_function)
            .register_interface(blended_wall_function, cyclic_ami)
            .register_all(
                &[PhysicalType::PorousJump, PhysicalType::Fan, PhysicalType::Cyclic],
                cyclic,
            );
        Ok(Self {
            table: register_geometric(builder).build()?,
        })
    }
}

impl FieldBuilder for Omega {
    fn field(&self) -> FieldName {
        FieldName::Omega
    }

    fn supported_kinds(&self) -> &'static [EntryKind] {
        KINDS
    }

    fn is_active(&self, region: &RegionContext) -> bool {
        region.is_fluid() && region.turbulence_model == TurbulenceModel::KOmega
    }

    fn table(&self) -> &DispatchTable {
        &self.table
    }
}

fn specification(scope: &BoundaryScope<'_>) -> Result<KOmegaSpecification, BcsError> {
    scope.select(&format!("{SUBTREE}/specification"))
}

fn direct_inlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::InletOutlet {
        inlet_value: scope.scalar(scope.f64(&format!("{SUBTREE}/specificDissipationRate"))?),
        value: scope.initial()?,
    })
}

fn inlet(scope: &BoundaryScope<'_>) -> Entry {
    match specification(scope)? {
        KOmegaSpecification::KAndOmega => direct_inlet(scope),
        KOmegaSpecification::IntensityAndViscosityRatio => {
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
        KOmegaSpecification::KAndOmega => {
            scope.scalar(scope.f64(&format!("{SUBTREE}/specificDissipationRate"))?)
        }
        KOmegaSpecification::IntensityAndViscosityRatio => {
            free_stream_turbulence(scope, SUBTREE)?.omega
        }
    };
    Ok(BoundaryEntry::Freestream { freestream_value })
}

fn blended_wall_function(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::OmegaWallFunction {
        blending: Blending::Tanh,
        value: scope.initial()?,
    })
}

fn wall(scope: &BoundaryScope<'_>) -> Entry {
    match scope.select::<WallVelocityCondition>("wall/velocity/type")? {
        WallVelocityCondition::AtmosphericWall => Ok(BoundaryEntry::AtmOmegaWallFunction {
            z0: scope.abl_f64("surfaceRoughnessLength")?,
            d: scope.abl_f64("minimumZCoordinate")?,
            value: scope.initial()?,
        }),
        WallVelocityCondition::NoSlip
        | WallVelocityCondition::Slip
        | WallVelocityCondition::MovingWall
        | WallVelocityCondition::TranslationalMovingWall
        | WallVelocityCondition::RotationalMovingWall => blended_wall_function(scope),
    }
}
