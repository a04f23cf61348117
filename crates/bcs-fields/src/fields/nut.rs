use bcs_core::BcsError;

use crate::builder::FieldBuilder;
use crate::catalog::{PhysicalType, TurbulenceModel, WallVelocityCondition};
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, EntryKind};
use crate::field::FieldName;
use crate::region::RegionContext;

use super::shared::{cyclic, cyclic_ami, register_geometric};

type Entry = Result<BoundaryEntry, BcsError>;

const KINDS: &[EntryKind] = &[
    EntryKind::Calculated,
    EntryKind::NutkWallFunction,
    EntryKind::AtmNutkWallFunction,
    EntryKind::NutUSpaldingWallFunction,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Turbulent viscosity, present under every turbulence model.
#[derive(Debug)]
pub struct TurbulentViscosity {
    table: DispatchTable,
}

impl TurbulentViscosity {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::Nut)
            .register_all(
                &[
                    PhysicalType::VelocityInlet,
                    PhysicalType::FlowRateInlet,
                    PhysicalType::PressureInlet,
                    PhysicalType::PressureOutlet,
                    PhysicalType::AblInlet,
                    PhysicalType::OpenChannelInlet,
                    PhysicalType::OpenChannelOutlet,
                    PhysicalType::Outflow,
                    PhysicalType::FreeStream,
                    PhysicalType::FarFieldRiemann,
                    PhysicalType::SubsonicInflow,
                    PhysicalType::SubsonicOutflow,
                    PhysicalType::SupersonicInflow,
                    PhysicalType::SupersonicOutflow,
                ],
                calculated,
            )
            .register(PhysicalType::Wall, wall)
            .register(PhysicalType::ThermoCoupledWall, wall_function)
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

impl FieldBuilder for TurbulentViscosity {
    fn field(&self) -> FieldName {
        FieldName::Nut
    }

    fn supported_kinds(&self) -> &'static [EntryKind] {
        KINDS
    }

    fn is_active(&self, region: &RegionContext) -> bool {
        region.is_fluid() && region.turbulence_model.is_turbulent()
    }

    fn table(&self) -> &DispatchTable {
        &self.table
    }
}

fn calculated(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::Calculated {
        value: scope.initial()?,
    })
}

fn wall_function(scope: &BoundaryScope<'_>) -> Entry {
    let value = scope.initial()?;
    Ok(match scope.region.turbulence_model {
        TurbulenceModel::SpalartAllmaras => BoundaryEntry::NutUSpaldingWallFunction { value },
        _ => BoundaryEntry::NutkWallFunction { value },
    })
}

fn wall(scope: &BoundaryScope<'_>) -> Entry {
    let atmospheric = scope.select::<WallVelocityCondition>("wall/velocity/type")?
        == WallVelocityCondition::AtmosphericWall;
    if atmospheric && scope.region.turbulence_model == TurbulenceModel::KOmega {
        return Ok(BoundaryEntry::AtmNutkWallFunction {
            z0: scope.abl_f64("surfaceRoughnessLength")?,
            value: scope.initial()?,
        });
    }
    wall_function(scope)
}
