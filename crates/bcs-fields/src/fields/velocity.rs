use bcs_core::BcsError;

use crate::builder::FieldBuilder;
use crate::catalog::{
    FlowRateSpecification, PhysicalType, VelocityProfile, VelocitySpecification,
    WallVelocityCondition,
};
use crate::constant::rpm_to_rad_per_s;
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, EntryKind, FlowRate};
use crate::field::FieldName;
use crate::region::RegionContext;

use super::shared::{
    calculated_backflow, cyclic, cyclic_ami, far_field_riemann, register_geometric,
    subsonic_inflow, subsonic_outflow, zero_gradient,
};

type Entry = Result<BoundaryEntry, BcsError>;

const KINDS: &[EntryKind] = &[
    EntryKind::FixedValue,
    EntryKind::TimeVaryingMappedFixedValue,
    EntryKind::SurfaceNormalFixedValue,
    EntryKind::FlowRateInletVelocity,
    EntryKind::PressureInletOutletVelocity,
    EntryKind::AtmBoundaryLayerInletVelocity,
    EntryKind::InletOutlet,
    EntryKind::ZeroGradient,
    EntryKind::Freestream,
    EntryKind::FarfieldRiemann,
    EntryKind::SubsonicInflow,
    EntryKind::SubsonicOutflow,
    EntryKind::NoSlip,
    EntryKind::Slip,
    EntryKind::MovingWallVelocity,
    EntryKind::RotatingWallVelocity,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Velocity field of fluid regions.
#[derive(Debug)]
pub struct Velocity {
    table: DispatchTable,
}

impl Velocity {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::U)
            .register(PhysicalType::VelocityInlet, velocity_inlet)
            .register(PhysicalType::FlowRateInlet, flow_rate_inlet)
            .register(PhysicalType::PressureInlet, pressure_inlet_outlet)
            .register(PhysicalType::PressureOutlet, pressure_outlet)
            .register(PhysicalType::AblInlet, abl_inlet)
            .register(PhysicalType::OpenChannelInlet, open_channel_inlet)
            .register(PhysicalType::OpenChannelOutlet, open_channel_outlet)
            .register_all(
                &[PhysicalType::Outflow, PhysicalType::SupersonicOutflow],
                zero_gradient,
            )
            .register(PhysicalType::FreeStream, free_stream)
            .register(PhysicalType::FarFieldRiemann, far_field_riemann)
            .register(PhysicalType::SubsonicInflow, subsonic_inflow)
            .register(PhysicalType::SubsonicOutflow, subsonic_outflow)
            .register(PhysicalType::SupersonicInflow, supersonic_inflow)
            .register(PhysicalType::Wall, wall)
            .register(PhysicalType::ThermoCoupledWall, no_slip)
            .register_interface(no_slip, cyclic_ami)
            .register_all(
                &[PhysicalType::PorousJump, PhysicalType::Fan, PhysicalType::Cyclic],
                cyclic,
            );
        Ok(Self {
            table: register_geometric(builder).build()?,
        })
    }
}

impl FieldBuilder for Velocity {
    fn field(&self) -> FieldName {
        FieldName::U
    }

    fn supported_kinds(&self) -> &'static [EntryKind] {
        KINDS
    }

    fn is_active(&self, region: &RegionContext) -> bool {
        region.is_fluid()
    }

    fn table(&self) -> &DispatchTable {
        &self.table
    }
}

fn velocity_inlet(scope: &BoundaryScope<'_>) -> Entry {
    match scope.select::<VelocitySpecification>("velocityInlet/velocity/specification")? {
        VelocitySpecification::Component => {
            match scope.select::<VelocityProfile>("velocityInlet/velocity/component/profile")? {
                VelocityProfile::Constant => Ok(BoundaryEntry::FixedValue {
                    value: scope
                        .vector_value(scope.vector("velocityInlet/velocity/component/constant")?),
                }),
                VelocityProfile::SpatialDistribution => {
                    Ok(BoundaryEntry::TimeVaryingMappedFixedValue {
                        set_average: false,
                        offset: scope.vector_value([0.0; 3]),
                    })
                }
                VelocityProfile::TemporalDistribution => Ok(BoundaryEntry::unsupported(
                    "temporal velocity component profiles are not supported",
                )),
            }
        }
        VelocitySpecification::MagnitudeNormal => {
            let magnitude = scope.f64("velocityInlet/velocity/magnitudeNormal/constant")?;
            Ok(BoundaryEntry::SurfaceNormalFixedValue {
                ref_value: scope.scalar(-magnitude),
            })
        }
    }
}

fn flow_rate_inlet(scope: &BoundaryScope<'_>) -> Entry {
    let rate = match scope.select::<FlowRateSpecification>("flowRateInlet/flowRate/specification")?
    {
        FlowRateSpecification::VolumeFlowRate => {
            FlowRate::Volumetric(scope.f64("flowRateInlet/flowRate/volumeFlowRate")?)
        }
        FlowRateSpecification::MassFlowRate => {
            FlowRate::Mass(scope.f64("flowRateInlet/flowRate/massFlowRate")?)
        }
    };
    Ok(BoundaryEntry::FlowRateInletVelocity {
        rate,
        value: scope.vector_value([0.0; 3]),
    })
}

fn pressure_inlet_outlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::PressureInletOutletVelocity {
        value: scope.initial()?,
    })
}

fn pressure_outlet(scope: &BoundaryScope<'_>) -> Entry {
    if calculated_backflow(scope)? {
        pressure_inlet_outlet(scope)
    } else {
        Ok(BoundaryEntry::ZeroGradient)
    }
}

fn abl_inlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::AtmBoundaryLayerInletVelocity {
        flow_dir: scope.abl_vector("flowDirection")?,
        z_dir: scope.abl_vector("groundNormalDirection")?,
        u_ref: scope.abl_f64("referenceFlowSpeed")?,
        z_ref: scope.abl_f64("referenceHeight")?,
        z0: scope.abl_f64("surfaceRoughnessLength")?,
        d: scope.abl_f64("minimumZCoordinate")?,
    })
}

fn open_channel_inlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::FlowRateInletVelocity {
        rate: FlowRate::Volumetric(scope.f64("openChannelInlet/volumeFlowRate")?),
        value: scope.vector_value([0.0; 3]),
    })
}

fn open_channel_outlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::InletOutlet {
        inlet_value: scope.vector_value([0.0; 3]),
        value: scope.initial()?,
    })
}

fn free_stream(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::Freestream {
        freestream_value: scope.vector_value(scope.vector("freeStream/streamVelocity")?),
    })
}

fn supersonic_inflow(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::FixedValue {
        value: scope.vector_value(scope.vector("supersonicInflow/velocity")?),
    })
}

fn no_slip(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::NoSlip)
}

fn wall(scope: &BoundaryScope<'_>) -> Entry {
    match scope.select::<WallVelocityCondition>("wall/velocity/type")? {
        WallVelocityCondition::NoSlip | WallVelocityCondition::AtmosphericWall => {
            Ok(BoundaryEntry::NoSlip)
        }
        WallVelocityCondition::Slip => Ok(BoundaryEntry::Slip),
        WallVelocityCondition::MovingWall => Ok(BoundaryEntry::MovingWallVelocity {
            value: scope.vector_value([0.0; 3]),
        }),
        WallVelocityCondition::TranslationalMovingWall => Ok(BoundaryEntry::FixedValue {
            value: scope.vector_value(scope.vector("wall/velocity/velocity")?),
        }),
        WallVelocityCondition::RotationalMovingWall => {
            let root = "wall/velocity/rotationalMovingWall";
            Ok(BoundaryEntry::RotatingWallVelocity {
                origin: scope.vector(&format!("{root}/rotationAxisOrigin"))?,
                axis: scope.vector(&format!("{root}/rotationAxisDirection"))?,
                omega: rpm_to_rad_per_s(scope.f64(&format!("{root}/speed"))?),
                value: scope.vector_value([0.0; 3]),
            })
        }
    }
}
