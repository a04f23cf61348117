use bcs_core::{BcsError, DimensionedValue};

use crate::builder::FieldBuilder;
use crate::catalog::{
    FlowRateSpecification, PhysicalType, TemperatureProfile, TemporalSpecification,
    WallTemperatureCondition,
};
use crate::dispatch::{BoundaryScope, DispatchTable, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, EntryKind, HeatFluxMode};
use crate::field::FieldName;
use crate::region::RegionContext;

use super::shared::{
    calculated_backflow, cyclic, cyclic_ami, far_field_riemann, register_geometric,
    subsonic_inflow, subsonic_outflow, thermo_method, zero_gradient,
};

type Entry = Result<BoundaryEntry, BcsError>;

const KINDS: &[EntryKind] = &[
    EntryKind::FixedValue,
    EntryKind::TimeVaryingMappedFixedValue,
    EntryKind::UniformFixedValue,
    EntryKind::InletOutletTotalTemperature,
    EntryKind::ZeroGradient,
    EntryKind::InletOutlet,
    EntryKind::Freestream,
    EntryKind::FarfieldRiemann,
    EntryKind::SubsonicInflow,
    EntryKind::SubsonicOutflow,
    EntryKind::ExternalWallHeatFluxTemperature,
    EntryKind::CoupledBaffle,
    EntryKind::CyclicAmi,
    EntryKind::Cyclic,
    EntryKind::Symmetry,
    EntryKind::Empty,
    EntryKind::Wedge,
];

/// Temperature field; built for fluid and solid regions alike.
#[derive(Debug)]
pub struct Temperature {
    table: DispatchTable,
}

impl Temperature {
    /// Builds the dispatch table.
    pub fn new() -> Result<Self, BcsError> {
        let builder = DispatchTableBuilder::new(FieldName::T)
            .register_all(
                &[
                    PhysicalType::VelocityInlet,
                    PhysicalType::AblInlet,
                    PhysicalType::OpenChannelInlet,
                    PhysicalType::SupersonicInflow,
                ],
                by_profile,
            )
            .register(PhysicalType::FlowRateInlet, flow_rate_inlet)
            .register(PhysicalType::PressureInlet, total_temperature)
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
            .register(PhysicalType::Wall, wall)
            .register(PhysicalType::ThermoCoupledWall, coupled_baffle)
            .register_interface(coupled_baffle, cyclic_ami)
            .register_all(
                &[PhysicalType::PorousJump, PhysicalType::Fan, PhysicalType::Cyclic],
                cyclic,
            );
        Ok(Self {
            table: register_geometric(builder).build()?,
        })
    }
}

impl FieldBuilder for Temperature {
    fn field(&self) -> FieldName {
        FieldName::T
    }

    fn supported_kinds(&self) -> &'static [EntryKind] {
        KINDS
    }

    fn is_active(&self, _region: &RegionContext) -> bool {
        true
    }

    fn table(&self) -> &DispatchTable {
        &self.table
    }
}

fn constant(scope: &BoundaryScope<'_>) -> Result<DimensionedValue, BcsError> {
    Ok(scope.scalar(scope.f64("temperature/constant")?))
}

fn by_profile(scope: &BoundaryScope<'_>) -> Entry {
    match scope.select::<TemperatureProfile>("temperature/profile")? {
        TemperatureProfile::Constant => Ok(BoundaryEntry::FixedValue {
            value: constant(scope)?,
        }),
        TemperatureProfile::SpatialDistribution => {
            Ok(BoundaryEntry::TimeVaryingMappedFixedValue {
                set_average: false,
                offset: scope.scalar(0.0),
            })
        }
        TemperatureProfile::TemporalDistribution => temporal(scope),
    }
}

fn temporal(scope: &BoundaryScope<'_>) -> Entry {
    let root = "temperature/temporalDistribution";
    let specification: TemporalSpecification = scope.select(&format!("{root}/specification"))?;
    let uniform_value = match specification {
        TemporalSpecification::PiecewiseLinear => {
            let times = scope.list(&format!("{root}/piecewiseLinear/t"))?;
            let values = scope.list(&format!("{root}/piecewiseLinear/v"))?;
            if times.len() != values.len() {
                return Err(BcsError::invalid_value(
                    &scope.path(&format!("{root}/piecewiseLinear/v")),
                    &format!("{} values for {} times", values.len(), times.len()),
                    "one value per time",
                ));
            }
            DimensionedValue::table(times.into_iter().zip(values).collect(), scope.dimension())
        }
        TemporalSpecification::Polynomial => {
            DimensionedValue::list(scope.list(&format!("{root}/polynomial"))?, scope.dimension())
        }
    };
    Ok(BoundaryEntry::UniformFixedValue { uniform_value })
}

fn total_temperature(scope: &BoundaryScope<'_>) -> Entry {
    let value = constant(scope)?;
    Ok(BoundaryEntry::InletOutletTotalTemperature {
        inlet_value: value.clone(),
        t0: value,
    })
}

fn flow_rate_inlet(scope: &BoundaryScope<'_>) -> Entry {
    match scope.select::<FlowRateSpecification>("flowRateInlet/flowRate/specification")? {
        FlowRateSpecification::VolumeFlowRate => by_profile(scope),
        FlowRateSpecification::MassFlowRate => total_temperature(scope),
    }
}

fn pressure_outlet(scope: &BoundaryScope<'_>) -> Entry {
    if calculated_backflow(scope)? {
        total_temperature(scope)
    } else {
        Ok(BoundaryEntry::ZeroGradient)
    }
}

fn open_channel_outlet(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::InletOutlet {
        inlet_value: constant(scope)?,
        value: scope.initial()?,
    })
}

fn free_stream(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::Freestream {
        freestream_value: constant(scope)?,
    })
}

fn wall(scope: &BoundaryScope<'_>) -> Entry {
    let heat_flux = match scope.select::<WallTemperatureCondition>("wall/temperature/type")? {
        WallTemperatureCondition::Adiabatic => return Ok(BoundaryEntry::ZeroGradient),
        WallTemperatureCondition::ConstantTemperature => {
            return Ok(BoundaryEntry::FixedValue {
                value: scope.scalar(scope.f64("wall/temperature/temperature")?),
            })
        }
        WallTemperatureCondition::ConstantHeatFlux => HeatFluxMode::Flux {
            q: scope.f64("wall/temperature/heatFlux")?,
        },
        WallTemperatureCondition::Convection => HeatFluxMode::Coefficient {
            h: scope.f64("wall/temperature/heatTransferCoefficient")?,
            ta: scope.scalar(scope.f64("wall/temperature/freeStreamTemperature")?),
        },
    };
    Ok(BoundaryEntry::ExternalWallHeatFluxTemperature {
        heat_flux,
        kappa_method: thermo_method(scope),
        value: scope.initial()?,
    })
}

fn coupled_baffle(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::CoupledBaffle {
        kappa_method: thermo_method(scope),
        value: scope.initial()?,
    })
}
