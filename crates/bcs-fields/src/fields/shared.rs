//! Handlers and derivations used by more than one field.

use bcs_core::{BcsError, DimensionedValue, ErrorInfo};

use crate::catalog::{KEpsilonSpecification, KOmegaSpecification, PhysicalType, TurbulenceModel};
use crate::dispatch::{BoundaryScope, DispatchTableBuilder};
use crate::entry::{BoundaryEntry, ThermoMethod};
use crate::turbulence::{TurbulenceInputs, TurbulenceState};

type Entry = Result<BoundaryEntry, BcsError>;

pub(crate) fn zero_gradient(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::ZeroGradient)
}

pub(crate) fn cyclic(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::Cyclic)
}

pub(crate) fn cyclic_ami(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::CyclicAmi)
}

fn symmetry(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::Symmetry)
}

fn empty(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::Empty)
}

fn wedge(_: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::Wedge)
}

/// Symmetry, empty and wedge map onto their same-named kinds for every field.
pub(crate) fn register_geometric(builder: DispatchTableBuilder) -> DispatchTableBuilder {
    builder
        .register(PhysicalType::Symmetry, symmetry)
        .register(PhysicalType::Empty, empty)
        .register(PhysicalType::Wedge, wedge)
}

pub(crate) fn far_field_riemann(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::FarfieldRiemann {
        flow_dir: scope.vector("farFieldRiemann/flowDirection")?,
        mach_inf: scope.f64("farFieldRiemann/machNumber")?,
        p_inf: scope.f64("farFieldRiemann/staticPressure")?,
        t_inf: scope.f64("farFieldRiemann/staticTemperature")?,
    })
}

pub(crate) fn subsonic_inflow(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::SubsonicInflow {
        flow_dir: scope.vector("subsonicInflow/flowDirection")?,
        p0: scope.f64("subsonicInflow/totalPressure")?,
        t0: scope.f64("subsonicInflow/totalTemperature")?,
    })
}

pub(crate) fn subsonic_outflow(scope: &BoundaryScope<'_>) -> Entry {
    Ok(BoundaryEntry::SubsonicOutflow {
        p_exit: scope.f64("subsonicOutflow/staticPressure")?,
    })
}

pub(crate) fn calculated_backflow(scope: &BoundaryScope<'_>) -> Result<bool, BcsError> {
    scope.flag("pressureOutlet/calculatedBackflow")
}

pub(crate) fn thermo_method(scope: &BoundaryScope<'_>) -> ThermoMethod {
    if scope.region.is_fluid() {
        ThermoMethod::FluidThermo
    } else {
        ThermoMethod::SolidThermo
    }
}

/// Two-equation inlet specification, independent of the model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InletSpecification {
    Direct,
    IntensityAndViscosityRatio,
}

/// Configuration subtree of the active two-equation model.
pub(crate) fn two_equation_subtree(model: TurbulenceModel) -> &'static str {
    match model {
        TurbulenceModel::KOmega => "turbulence/k-omega",
        _ => "turbulence/k-epsilon",
    }
}

/// Subtree and specification of the active two-equation model.
pub(crate) fn two_equation_spec(
    scope: &BoundaryScope<'_>,
) -> Result<(&'static str, InletSpecification), BcsError> {
    match scope.region.turbulence_model {
        TurbulenceModel::KOmega => {
            let spec = match scope
                .select::<KOmegaSpecification>("turbulence/k-omega/specification")?
            {
                KOmegaSpecification::KAndOmega => InletSpecification::Direct,
                KOmegaSpecification::IntensityAndViscosityRatio => {
                    InletSpecification::IntensityAndViscosityRatio
                }
            };
            Ok(("turbulence/k-omega", spec))
        }
        TurbulenceModel::KEpsilon => {
            let spec = match scope
                .select::<KEpsilonSpecification>("turbulence/k-epsilon/specification")?
            {
                KEpsilonSpecification::KAndEpsilon => InletSpecification::Direct,
                KEpsilonSpecification::IntensityAndViscosityRatio => {
                    InletSpecification::IntensityAndViscosityRatio
                }
            };
            Ok(("turbulence/k-epsilon", spec))
        }
        other => Err(BcsError::Dispatch(
            ErrorInfo::new("inactive-model", "two-equation inlet under another model")
                .with_context("model", other.as_str())
                .with_context("boundary", scope.boundary.name.as_str()),
        )),
    }
}

/// Molecular kinematic viscosity at the free stream state of the boundary:
/// the free stream pressure (made absolute) and the boundary temperature.
pub(crate) fn free_stream_viscosity(
    scope: &BoundaryScope<'_>,
) -> Result<DimensionedValue, BcsError> {
    let pressure = scope.f64("freeStream/pressure")? + scope.operating_pressure()?;
    let temperature = scope.f64("temperature/constant")?;
    scope
        .cx
        .resolver
        .resolve(&scope.region.material, pressure, temperature)?
        .kinematic_viscosity()
}

/// Turbulence derived at the free stream state of the boundary, with
/// intensity and viscosity ratio read from `subtree`.
pub(crate) fn free_stream_turbulence(
    scope: &BoundaryScope<'_>,
    subtree: &str,
) -> Result<TurbulenceState, BcsError> {
    let velocity = scope.vector("freeStream/streamVelocity")?;
    let speed = velocity.iter().map(|c| c * c).sum::<f64>().sqrt();
    let inputs = TurbulenceInputs {
        velocity: speed,
        intensity: scope.f64(&format!("{subtree}/turbulentIntensity"))? / 100.0,
        viscosity_ratio: scope.f64(&format!("{subtree}/turbulentViscosityRatio"))?,
    };
    TurbulenceState::derive(inputs, &free_stream_viscosity(scope)?)
}
