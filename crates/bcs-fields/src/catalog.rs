use std::fmt;
use std::str::FromStr;

use bcs_core::{paths, BcsError, ConfigAccessor};
use serde::{Deserialize, Serialize};

/// Declares a closed configuration enum together with its string tags.
macro_rules! config_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $tag:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $tag)] $variant,)+
        }

        impl $name {
            /// Every variant in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Configuration tag of the variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $tag,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

config_enum! {
    /// Physical category of a boundary surface, one per boundary.
    pub enum PhysicalType {
        /// Prescribed velocity inlet.
        VelocityInlet => "velocityInlet",
        /// Prescribed volume or mass flow rate inlet.
        FlowRateInlet => "flowRateInlet",
        /// Prescribed total pressure inlet.
        PressureInlet => "pressureInlet",
        /// Prescribed pressure outlet.
        PressureOutlet => "pressureOutlet",
        /// Atmospheric boundary layer inlet.
        AblInlet => "ablInlet",
        /// Open channel (free surface) inlet.
        OpenChannelInlet => "openChannelInlet",
        /// Open channel (free surface) outlet.
        OpenChannelOutlet => "openChannelOutlet",
        /// Fully developed outflow.
        Outflow => "outflow",
        /// Free stream far boundary.
        FreeStream => "freeStream",
        /// Riemann-invariant far field.
        FarFieldRiemann => "farFieldRiemann",
        /// Subsonic inflow.
        SubsonicInflow => "subsonicInflow",
        /// Subsonic outflow.
        SubsonicOutflow => "subsonicOutflow",
        /// Supersonic inflow.
        SupersonicInflow => "supersonicInflow",
        /// Supersonic outflow.
        SupersonicOutflow => "supersonicOutflow",
        /// Wall.
        Wall => "wall",
        /// Wall thermally coupled to a neighbouring region.
        ThermoCoupledWall => "thermoCoupledWall",
        /// Symmetry plane.
        Symmetry => "symmetry",
        /// Interface whose behaviour depends on its [`InterfaceMode`].
        Interface => "interface",
        /// Porous jump baffle.
        PorousJump => "porousJump",
        /// Fan baffle.
        Fan => "fan",
        /// Empty (2-D) patch.
        Empty => "empty",
        /// Cyclic patch.
        Cyclic => "cyclic",
        /// Axisymmetric wedge patch.
        Wedge => "wedge",
    }
}

impl PhysicalType {
    /// Number of physical types.
    pub const COUNT: usize = 23;

    /// Dense index of the variant, usable as a table slot.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

config_enum! {
    /// Secondary selector of an interface boundary.
    pub enum InterfaceMode {
        /// Periodic connection inside one region.
        InternalInterface => "internalInterface",
        /// Rotational periodicity.
        RotationalPeriodic => "rotationalPeriodic",
        /// Translational periodicity.
        TranslationalPeriodic => "translationalPeriodic",
        /// Coupling between two regions.
        RegionInterface => "regionInterface",
    }
}

impl InterfaceMode {
    /// Every mode except region coupling is periodic.
    pub fn is_periodic(&self) -> bool {
        !matches!(self, InterfaceMode::RegionInterface)
    }
}

config_enum! {
    /// How a boundary temperature is given.
    pub enum TemperatureProfile {
        /// Uniform constant.
        Constant => "constant",
        /// Mapped spatial distribution.
        SpatialDistribution => "spatialDistribution",
        /// Time dependent uniform value.
        TemporalDistribution => "temporalDistribution",
    }
}

config_enum! {
    /// Form of a temporal distribution.
    pub enum TemporalSpecification {
        /// Interpolated `(t, v)` table.
        PiecewiseLinear => "piecewiseLinear",
        /// Polynomial in time.
        Polynomial => "polynomial",
    }
}

config_enum! {
    /// Flow rate given at a flow rate inlet.
    pub enum FlowRateSpecification {
        /// Volumetric flow rate `[m^3/s]`.
        VolumeFlowRate => "volumeFlowRate",
        /// Mass flow rate `[kg/s]`.
        MassFlowRate => "massFlowRate",
    }
}

config_enum! {
    /// Inlet specification of the k-omega model.
    pub enum KOmegaSpecification {
        /// k and omega given directly.
        KAndOmega => "kAndOmega",
        /// Derived from turbulence intensity and viscosity ratio.
        IntensityAndViscosityRatio => "intensityAndViscosityRatio",
    }
}

config_enum! {
    /// Inlet specification of the k-epsilon model.
    pub enum KEpsilonSpecification {
        /// k and epsilon given directly.
        KAndEpsilon => "kAndEpsilon",
        /// Derived from turbulence intensity and viscosity ratio.
        IntensityAndViscosityRatio => "intensityAndViscosityRatio",
    }
}

config_enum! {
    /// Inlet specification of the Spalart-Allmaras model.
    pub enum SpalartAllmarasSpecification {
        /// Modified turbulent viscosity given directly.
        ModifiedTurbulentViscosity => "modifiedTurbulentViscosity",
        /// Turbulent viscosity ratio.
        TurbulentViscosityRatio => "turbulentViscosityRatio",
    }
}

config_enum! {
    /// Velocity condition of a wall.
    pub enum WallVelocityCondition {
        /// No slip.
        NoSlip => "noSlip",
        /// Slip.
        Slip => "slip",
        /// Wall moving with the mesh.
        MovingWall => "movingWall",
        /// Rough atmospheric ground.
        AtmosphericWall => "atmosphericWall",
        /// Wall translating at a prescribed velocity.
        TranslationalMovingWall => "translationalMovingWall",
        /// Wall rotating about an axis.
        RotationalMovingWall => "rotationalMovingWall",
    }
}

config_enum! {
    /// Thermal condition of a wall.
    pub enum WallTemperatureCondition {
        /// No heat flux.
        Adiabatic => "adiabatic",
        /// Prescribed temperature.
        ConstantTemperature => "constantTemperature",
        /// Prescribed heat flux.
        ConstantHeatFlux => "constantHeatFlux",
        /// Convective exchange with an ambient temperature.
        Convection => "convection",
    }
}

config_enum! {
    /// How a velocity inlet is specified.
    pub enum VelocitySpecification {
        /// Velocity vector.
        Component => "component",
        /// Magnitude normal to the patch.
        MagnitudeNormal => "magnitudeNormal",
    }
}

config_enum! {
    /// Profile of an inlet velocity vector.
    pub enum VelocityProfile {
        /// Uniform constant.
        Constant => "constant",
        /// Mapped spatial distribution.
        SpatialDistribution => "spatialDistribution",
        /// Time dependent uniform value.
        TemporalDistribution => "temporalDistribution",
    }
}

config_enum! {
    /// Turbulence model active for the whole case.
    pub enum TurbulenceModel {
        /// Inviscid flow.
        Inviscid => "inviscid",
        /// Laminar flow.
        Laminar => "laminar",
        /// One-equation Spalart-Allmaras.
        SpalartAllmaras => "spalartAllmaras",
        /// Two-equation k-epsilon.
        KEpsilon => "k-epsilon",
        /// Two-equation k-omega.
        KOmega => "k-omega",
    }
}

impl TurbulenceModel {
    /// Returns true for models that transport a turbulent viscosity.
    pub fn is_turbulent(&self) -> bool {
        matches!(
            self,
            TurbulenceModel::SpalartAllmaras | TurbulenceModel::KEpsilon | TurbulenceModel::KOmega
        )
    }
}

/// One boundary of a region as seen by the field builders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundaryDescriptor {
    /// Identifier unique within the region.
    pub id: u64,
    /// Patch name.
    pub name: String,
    /// Owning region.
    pub region: String,
    /// Physical category.
    pub physical_type: PhysicalType,
    /// Root of the boundary's configuration subtree.
    pub path: String,
}

impl BoundaryDescriptor {
    /// Creates a descriptor rooted at the canonical boundary path.
    pub fn new(region: &str, id: u64, name: &str, physical_type: PhysicalType) -> Self {
        Self {
            id,
            name: name.to_string(),
            region: region.to_string(),
            physical_type,
            path: paths::boundary(region, id),
        }
    }
}

/// Reads the boundaries of `region` in declaration order.
pub fn load_catalog(
    config: &dyn ConfigAccessor,
    region: &str,
) -> Result<Vec<BoundaryDescriptor>, BcsError> {
    config
        .get_boundary_conditions(region)?
        .into_iter()
        .map(|record| {
            let physical_type = record.physical_type.parse::<PhysicalType>().map_err(|_| {
                BcsError::invalid_value(
                    &format!("{}/physicalType", paths::boundary(region, record.id)),
                    &record.physical_type,
                    "a physical type",
                )
            })?;
            Ok(BoundaryDescriptor::new(
                region,
                record.id,
                &record.name,
                physical_type,
            ))
        })
        .collect()
}
