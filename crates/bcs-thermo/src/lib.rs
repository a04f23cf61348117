#![deny(missing_docs)]
#![doc = "Thermophysical property resolution: materials, equation-of-state providers and the resolver used by field builders."]

/// Equation-of-state providers and the built-in property library.
pub mod eos;
/// Material descriptors read from the case configuration.
pub mod material;
/// Resolver mapping a material and state point to fluid properties.
pub mod resolver;

pub use eos::{EquationOfState, MaterialModel, PropertyLibrary, StatePoint, StateRange, Sutherland};
pub use material::{Material, Phase};
pub use resolver::{FluidProperties, ThermoResolver};
