use bcs_core::BcsError;

use crate::builder::FieldBuilder;
use crate::catalog::PhysicalType;
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, EntryKind};
use crate::field::FieldName;
use crate::region::RegionContext;

use super::shared::{
    calculated_backflow, cyclic, cyclic_ami, far_field_riemann, register_geometric,
    subsonic_inflow, subsonic_outflow, zero_gradient,
};

type Entry = Result<BoundaryEntry, BcsError>;

const KINDS: &[EntryKind] = &[
    EntryKind::FixedFluxPressure,
    EntryKind::TotalPressure,
    EntryKind::FixedValue,
    EntryKind::ZeroGradient,
    EntryKind::FreestreamPressure,
    EntryKind::FarfieldRiemann,
    EntryKind::SubsonicInflow,
    EntryKind::SubsonicOutflow,
    EntryKind::PorousBafflePressure,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Absolute pressure field of fluid regions.
///
/// Every gauge pressure read from the configuration is shifted by the
/// operating pressure.
#[derive(Debug)]
pub struct Pressure {
    table: DispatchTable,
}

impl Pressure {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::P)
            .register_all(
                &[
                    PhysicalType::VelocityInlet,
                    PhysicalType::FlowRateInlet,
                    PhysicalType::AblInlet,
                    PhysicalType::OpenChannelInlet,
                    PhysicalType::Wall,
                    PhysicalType::ThermoCoupledWall,
                ],
                fixed_flux_pressure,
            )
            .register(PhysicalType::PressureInlet, pressure_inlet)
            .register(PhysicalType::PressureOutlet, pressure_outlet)
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
            .register_interface(fixed_flux_pressure, cyclic_ami)
            .register(PhysicalType::PorousJump, porous_baffle)
            .register_all(&[PhysicalType::Fan, PhysicalType::Cyclic], cyclic);
        Ok(Self {
            table: register_geometric(builder).build()?,
        })
    }
}

impl FieldBuilder for Pressure {
    fn field(&self) -> FieldName {
        FieldName::P
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

fn absolute(scope: &BoundaryScope<'_>, sub: &str) -> Result<f64, BcsError> {
    Ok(scope.f64(sub)? + scope.operating_pressure()?)
}

fn fixed_flux_pressure(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::FixedFluxPressure {
        value: scope.initial()?,
    })
}

fn pressure_inlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::TotalPressure {
        p0: scope.scalar(absolute(scope, "pressureInlet/pressure")?),
    })
}

fn pressure_outlet(scope: &BoundaryScope<'_>) -> Entry {
    let pressure = scope.scalar(absolute(scope, "pressureOutlet/totalPressure")?);
    if calculated_backflow(scope)? {
        Ok(BoundaryEntry::TotalPressure { p0: pressure })
    } else {
        Ok(BoundaryEntry::FixedValue { value: pressure })
    }
}

fn open_channel_outlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::TotalPressure {
        p0: scope.scalar(scope.operating_pressure()?),
    })
}

fn free_stream(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::FreestreamPressure {
        freestream_value: scope.scalar(absolute(scope, "freeStream/pressure")?),
    })
}

fn supersonic_inflow(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::FixedValue {
        value: scope.scalar(absolute(scope, "supersonicInflow/staticPressure")?),
    })
}

fn porous_baffle(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::PorousBafflePressure {
        d: scope.f64("porousJump/darcyCoefficient")?,
        i: scope.f64("porousJump/inertialCoefficient")?,
        length: scope.f64("porousJump/porousMediaThickness")?,
    })
}
