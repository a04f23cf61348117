//! Boundary entries emitted into a field's boundary map.

use std::fmt;

use bcs_core::DimensionedValue;
use serde::{Deserialize, Serialize};

/// Which thermophysical package evaluates conductivity on a thermal wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThermoMethod {
    /// Region solved with the solid thermo package.
    SolidThermo,
    /// Region solved with the fluid thermo package.
    FluidThermo,
}

/// Heat input of an external heat flux wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum HeatFluxMode {
    /// Prescribed flux `[W/m^2]`.
    Flux {
        /// Heat flux.
        q: f64,
    },
    /// Convection to an ambient temperature.
    Coefficient {
        /// Heat transfer coefficient `[W/(m^2 K)]`.
        h: f64,
        /// Ambient temperature.
        ta: DimensionedValue,
    },
}

/// Flow rate imposed by a flow rate inlet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlowRate {
    /// `[m^3/s]`.
    Volumetric(f64),
    /// `[kg/s]`.
    Mass(f64),
}

/// Blending of the viscous and log-layer omega wall function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Blending {
    /// Hyperbolic tangent blending.
    Tanh,
}

/// Fieldless discriminant of [`BoundaryEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum EntryKind {
    FixedValue,
    ZeroGradient,
    Calculated,
    InletOutlet,
    InletOutletTotalTemperature,
    Freestream,
    FreestreamPressure,
    FarfieldRiemann,
    SubsonicInflow,
    SubsonicOutflow,
    TimeVaryingMappedFixedValue,
    UniformFixedValue,
    ExternalWallHeatFluxTemperature,
    CoupledBaffle,
    ViscosityRatioInletOutletTdr,
    TurbulentIntensityKineticEnergyInlet,
    OmegaWallFunction,
    AtmOmegaWallFunction,
    EpsilonWallFunction,
    KqRWallFunction,
    NutkWallFunction,
    AtmNutkWallFunction,
    NutUSpaldingWallFunction,
    NoSlip,
    Slip,
    MovingWallVelocity,
    RotatingWallVelocity,
    SurfaceNormalFixedValue,
    FlowRateInletVelocity,
    PressureInletOutletVelocity,
    AtmBoundaryLayerInletVelocity,
    FixedFluxPressure,
    TotalPressure,
    PorousBafflePressure,
    Symmetry,
    Cyclic,
    CyclicAmi,
    Empty,
    Wedge,
    Unsupported,
}

impl EntryKind {
    /// Boundary type name understood by the downstream solver.
    pub fn solver_type(&self) -> &'static str {
        match self {
            EntryKind::FixedValue => "fixedValue",
            EntryKind::ZeroGradient => "zeroGradient",
            EntryKind::Calculated => "calculated",
            EntryKind::InletOutlet => "inletOutlet",
            EntryKind::InletOutletTotalTemperature => "inletOutletTotalTemperature",
            EntryKind::Freestream => "freestream",
            EntryKind::FreestreamPressure => "freestreamPressure",
            EntryKind::FarfieldRiemann => "farfieldRiemann",
            EntryKind::SubsonicInflow => "subsonicInflow",
            EntryKind::SubsonicOutflow => "subsonicOutflow",
            EntryKind::TimeVaryingMappedFixedValue => "timeVaryingMappedFixedValue",
            EntryKind::UniformFixedValue => "uniformFixedValue",
            EntryKind::ExternalWallHeatFluxTemperature => "externalWallHeatFluxTemperature",
            EntryKind::CoupledBaffle => "NEXT::turbulentTemperatureCoupledBaffleMixed",
            EntryKind::ViscosityRatioInletOutletTdr => "viscosityRatioInletOutletTDR",
            EntryKind::TurbulentIntensityKineticEnergyInlet => {
                "turbulentIntensityKineticEnergyInlet"
            }
            EntryKind::OmegaWallFunction => "omegaWallFunction",
            EntryKind::AtmOmegaWallFunction => "atmOmegaWallFunction",
            EntryKind::EpsilonWallFunction => "epsilonWallFunction",
            EntryKind::KqRWallFunction => "kqRWallFunction",
            EntryKind::NutkWallFunction => "nutkWallFunction",
            EntryKind::AtmNutkWallFunction => "atmNutkWallFunction",
            EntryKind::NutUSpaldingWallFunction => "nutUSpaldingWallFunction",
            EntryKind::NoSlip => "noSlip",
            EntryKind::Slip => "slip",
            EntryKind::MovingWallVelocity => "movingWallVelocity",
            EntryKind::RotatingWallVelocity => "rotatingWallVelocity",
            EntryKind::SurfaceNormalFixedValue => "surfaceNormalFixedValue",
            EntryKind::FlowRateInletVelocity => "flowRateInletVelocity",
            EntryKind::PressureInletOutletVelocity => "pressureInletOutletVelocity",
            EntryKind::AtmBoundaryLayerInletVelocity => "atmBoundaryLayerInletVelocity",
            EntryKind::FixedFluxPressure => "fixedFluxPressure",
            EntryKind::TotalPressure => "totalPressure",
            EntryKind::PorousBafflePressure => "porousBafflePressure",
            EntryKind::Symmetry => "symmetry",
            EntryKind::Cyclic => "cyclic",
            EntryKind::CyclicAmi => "cyclicAMI",
            EntryKind::Empty => "empty",
            EntryKind::Wedge => "wedge",
            EntryKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.solver_type())
    }
}

/// One boundary condition for one field.
///
/// Every numeric leaf that carries a physical quantity is a
/// [`DimensionedValue`]; dimensionless parameters (intensity, mach number,
/// viscosity ratio) are plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
#[allow(missing_docs)]
pub enum BoundaryEntry {
    FixedValue {
        value: DimensionedValue,
    },
    ZeroGradient,
    Calculated {
        value: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    InletOutlet {
        inlet_value: DimensionedValue,
        value: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    InletOutletTotalTemperature {
        inlet_value: DimensionedValue,
        #[serde(rename = "T0")]
        t0: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    Freestream {
        freestream_value: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    FreestreamPressure {
        freestream_value: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    FarfieldRiemann {
        flow_dir: [f64; 3],
        mach_inf: f64,
        p_inf: f64,
        t_inf: f64,
    },
    #[serde(rename_all = "camelCase")]
    SubsonicInflow {
        flow_dir: [f64; 3],
        p0: f64,
        #[serde(rename = "T0")]
        t0: f64,
    },
    #[serde(rename_all = "camelCase")]
    SubsonicOutflow {
        p_exit: f64,
    },
    #[serde(rename_all = "camelCase")]
    TimeVaryingMappedFixedValue {
        set_average: bool,
        offset: DimensionedValue,
    },
    /// Time table when the magnitude is a table, polynomial coefficients when
    /// it is a list.
    #[serde(rename_all = "camelCase")]
    UniformFixedValue {
        uniform_value: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    ExternalWallHeatFluxTemperature {
        heat_flux: HeatFluxMode,
        kappa_method: ThermoMethod,
        value: DimensionedValue,
    },
    #[serde(
        rename = "NEXT::turbulentTemperatureCoupledBaffleMixed",
        rename_all = "camelCase"
    )]
    CoupledBaffle {
        kappa_method: ThermoMethod,
        value: DimensionedValue,
    },
    #[serde(rename = "viscosityRatioInletOutletTDR", rename_all = "camelCase")]
    ViscosityRatioInletOutletTdr {
        viscosity_ratio: f64,
        value: DimensionedValue,
    },
    TurbulentIntensityKineticEnergyInlet {
        intensity: f64,
        value: DimensionedValue,
    },
    OmegaWallFunction {
        blending: Blending,
        value: DimensionedValue,
    },
    AtmOmegaWallFunction {
        z0: f64,
        d: f64,
        value: DimensionedValue,
    },
    EpsilonWallFunction {
        value: DimensionedValue,
    },
    KqRWallFunction {
        value: DimensionedValue,
    },
    NutkWallFunction {
        value: DimensionedValue,
    },
    AtmNutkWallFunction {
        z0: f64,
        value: DimensionedValue,
    },
    NutUSpaldingWallFunction {
        value: DimensionedValue,
    },
    NoSlip,
    Slip,
    MovingWallVelocity {
        value: DimensionedValue,
    },
    RotatingWallVelocity {
        origin: [f64; 3],
        axis: [f64; 3],
        /// Angular speed `[rad/s]`.
        omega: f64,
        value: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    SurfaceNormalFixedValue {
        ref_value: DimensionedValue,
    },
    FlowRateInletVelocity {
        rate: FlowRate,
        value: DimensionedValue,
    },
    PressureInletOutletVelocity {
        value: DimensionedValue,
    },
    #[serde(rename_all = "camelCase")]
    AtmBoundaryLayerInletVelocity {
        flow_dir: [f64; 3],
        z_dir: [f64; 3],
        u_ref: f64,
        z_ref: f64,
        z0: f64,
        d: f64,
    },
    FixedFluxPressure {
        value: DimensionedValue,
    },
    TotalPressure {
        p0: DimensionedValue,
    },
    PorousBafflePressure {
        /// Darcy coefficient.
        d: f64,
        /// Inertial coefficient.
        i: f64,
        /// Baffle thickness `[m]`.
        length: f64,
    },
    Symmetry,
    Cyclic,
    #[serde(rename = "cyclicAMI")]
    CyclicAmi,
    Empty,
    Wedge,
    /// Combination the synthesis cannot express; surfaced to the caller
    /// instead of failing the field.
    Unsupported {
        reason: String,
    },
}

impl BoundaryEntry {
    /// Marker entry for an unsupported combination.
    pub fn unsupported(reason: impl Into<String>) -> Self {
        BoundaryEntry::Unsupported {
            reason: reason.into(),
        }
    }

    /// Fieldless discriminant of the entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            BoundaryEntry::FixedValue { .. } => EntryKind::FixedValue,
            BoundaryEntry::ZeroGradient => EntryKind::ZeroGradient,
            BoundaryEntry::Calculated { .. } => EntryKind::Calculated,
            BoundaryEntry::InletOutlet { .. } => EntryKind::InletOutlet,
            BoundaryEntry::InletOutletTotalTemperature { .. } => {
                EntryKind::InletOutletTotalTemperature
            }
            BoundaryEntry::Freestream { .. } => EntryKind::Freestream,
            BoundaryEntry::FreestreamPressure { .. } => EntryKind::FreestreamPressure,
            BoundaryEntry::FarfieldRiemann { .. } => EntryKind::FarfieldRiemann,
            BoundaryEntry::SubsonicInflow { .. } => EntryKind::SubsonicInflow,
            BoundaryEntry::SubsonicOutflow { .. } => EntryKind::SubsonicOutflow,
            BoundaryEntry::TimeVaryingMappedFixedValue { .. } => {
                EntryKind::TimeVaryingMappedFixedValue
            }
            BoundaryEntry::UniformFixedValue { .. } => EntryKind::UniformFixedValue,
            BoundaryEntry::ExternalWallHeatFluxTemperature { .. } => {
                EntryKind::ExternalWallHeatFluxTemperature
            }
            BoundaryEntry::CoupledBaffle { .. } => EntryKind::CoupledBaffle,
            BoundaryEntry::ViscosityRatioInletOutletTdr { .. } => {
                EntryKind::ViscosityRatioInletOutletTdr
            }
            BoundaryEntry::TurbulentIntensityKineticEnergyInlet { .. } => {
                EntryKind::TurbulentIntensityKineticEnergyInlet
            }
            BoundaryEntry::OmegaWallFunction { .. } => EntryKind::OmegaWallFunction,
            BoundaryEntry::AtmOmegaWallFunction { .. } => EntryKind::AtmOmegaWallFunction,
            BoundaryEntry::EpsilonWallFunction { .. } => EntryKind::EpsilonWallFunction,
            BoundaryEntry::KqRWallFunction { .. } => EntryKind::KqRWallFunction,
            BoundaryEntry::NutkWallFunction { .. } => EntryKind::NutkWallFunction,
            BoundaryEntry::AtmNutkWallFunction { .. } => EntryKind::AtmNutkWallFunction,
            BoundaryEntry::NutUSpaldingWallFunction { .. } => EntryKind::NutUSpaldingWallFunction,
            BoundaryEntry::NoSlip => EntryKind::NoSlip,
            BoundaryEntry::Slip => EntryKind::Slip,
            BoundaryEntry::MovingWallVelocity { .. } => EntryKind::MovingWallVelocity,
            BoundaryEntry::RotatingWallVelocity { .. } => EntryKind::RotatingWallVelocity,
            BoundaryEntry::SurfaceNormalFixedValue { .. } => EntryKind::SurfaceNormalFixedValue,
            BoundaryEntry::FlowRateInletVelocity { .. } => EntryKind::FlowRateInletVelocity,
            BoundaryEntry::PressureInletOutletVelocity { .. } => {
                EntryKind::PressureInletOutletVelocity
            }
            BoundaryEntry::AtmBoundaryLayerInletVelocity { .. } => {
                EntryKind::AtmBoundaryLayerInletVelocity
            }
            BoundaryEntry::FixedFluxPressure { .. } => EntryKind::FixedFluxPressure,
            BoundaryEntry::TotalPressure { .. } => EntryKind::TotalPressure,
            BoundaryEntry::PorousBafflePressure { .. } => EntryKind::PorousBafflePressure,
            BoundaryEntry::Symmetry => EntryKind::Symmetry,
            BoundaryEntry::Cyclic => EntryKind::Cyclic,
            BoundaryEntry::CyclicAmi => EntryKind::CyclicAmi,
            BoundaryEntry::Empty => EntryKind::Empty,
            BoundaryEntry::Wedge => EntryKind::Wedge,
            BoundaryEntry::Unsupported { .. } => EntryKind::Unsupported,
        }
    }

    /// Returns true for [`BoundaryEntry::Unsupported`] markers.
    pub fn is_marker(&self) -> bool {
        matches!(self, BoundaryEntry::Unsupported { .. })
    }

    /// Every dimensioned leaf carried by the entry.
    pub fn dimensioned_values(&self) -> Vec<&DimensionedValue> {
        match self {
            BoundaryEntry::FixedValue { value }
            | BoundaryEntry::Calculated { value }
            | BoundaryEntry::EpsilonWallFunction { value }
            | BoundaryEntry::KqRWallFunction { value }
            | BoundaryEntry::NutkWallFunction { value }
            | BoundaryEntry::NutUSpaldingWallFunction { value }
            | BoundaryEntry::MovingWallVelocity { value }
            | BoundaryEntry::PressureInletOutletVelocity { value }
            | BoundaryEntry::FixedFluxPressure { value }
            | BoundaryEntry::CoupledBaffle { value, .. }
            | BoundaryEntry::ViscosityRatioInletOutletTdr { value, .. }
            | BoundaryEntry::TurbulentIntensityKineticEnergyInlet { value, .. }
            | BoundaryEntry::OmegaWallFunction { value, .. }
            | BoundaryEntry::AtmOmegaWallFunction { value, .. }
            | BoundaryEntry::AtmNutkWallFunction { value, .. }
            | BoundaryEntry::RotatingWallVelocity { value, .. }
            | BoundaryEntry::FlowRateInletVelocity { value, .. } => vec![value],
            BoundaryEntry::InletOutlet { inlet_value, value } => vec![inlet_value, value],
            BoundaryEntry::InletOutletTotalTemperature { inlet_value, t0 } => {
                vec![inlet_value, t0]
            }
            BoundaryEntry::Freestream { freestream_value }
            | BoundaryEntry::FreestreamPressure { freestream_value } => vec![freestream_value],
            BoundaryEntry::TimeVaryingMappedFixedValue { offset, .. } => vec![offset],
            BoundaryEntry::UniformFixedValue { uniform_value } => vec![uniform_value],
            BoundaryEntry::ExternalWallHeatFluxTemperature {
                heat_flux, value, ..
            } => match heat_flux {
                HeatFluxMode::Coefficient { ta, .. } => vec![ta, value],
                HeatFluxMode::Flux { .. } => vec![value],
            },
            BoundaryEntry::SurfaceNormalFixedValue { ref_value } => vec![ref_value],
            BoundaryEntry::TotalPressure { p0 } => vec![p0],
            BoundaryEntry::ZeroGradient
            | BoundaryEntry::FarfieldRiemann { .. }
            | BoundaryEntry::SubsonicInflow { .. }
            | BoundaryEntry::SubsonicOutflow { .. }
            | BoundaryEntry::AtmBoundaryLayerInletVelocity { .. }
            | BoundaryEntry::PorousBafflePressure { .. }
            | BoundaryEntry::NoSlip
            | BoundaryEntry::Slip
            | BoundaryEntry::Symmetry
            | BoundaryEntry::Cyclic
            | BoundaryEntry::CyclicAmi
            | BoundaryEntry::Empty
            | BoundaryEntry::Wedge
            | BoundaryEntry::Unsupported { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcs_core::Dimension;

    #[test]
    fn kinds_round_trip_through_entries() {
        let t = DimensionedValue::scalar(300.0, Dimension::TEMPERATURE);
        let entry = BoundaryEntry::InletOutlet {
            inlet_value: t.clone(),
            value: t,
        };
        assert_eq!(entry.kind(), EntryKind::InletOutlet);
        assert_eq!(entry.dimensioned_values().len(), 2);
        assert!(!entry.is_marker());
        assert!(BoundaryEntry::unsupported("x").is_marker());
    }

    #[test]
    fn serialized_tag_matches_solver_type() {
        let json = serde_json::to_value(BoundaryEntry::CyclicAmi).expect("serialize");
        assert_eq!(json["type"], EntryKind::CyclicAmi.solver_type());
        let json = serde_json::to_value(BoundaryEntry::ViscosityRatioInletOutletTdr {
            viscosity_ratio: 10.0,
            value: DimensionedValue::scalar(1.0, Dimension::SPECIFIC_DISSIPATION_RATE),
        })
        .expect("serialize");
        assert_eq!(json["type"], "viscosityRatioInletOutletTDR");
        assert_eq!(json["viscosityRatio"], 10.0);

        let baffle = BoundaryEntry::CoupledBaffle {
            kappa_method: ThermoMethod::SolidThermo,
            value: DimensionedValue::scalar(300.0, Dimension::TEMPERATURE),
        };
        let json = serde_json::to_value(&baffle).expect("serialize");
        assert_eq!(json["type"], "NEXT::turbulentTemperatureCoupledBaffleMixed");
        assert_eq!(json["type"], baffle.kind().solver_type());
        assert_eq!(json["kappaMethod"], "solidThermo");
    }
}
