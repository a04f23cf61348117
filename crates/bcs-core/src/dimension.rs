//! Seven-exponent physical dimension vectors.

use std::fmt;
use std::ops::{Div, Mul};

use serde::{Deserialize, Serialize};

/// Physical dimension expressed as SI base exponents.
///
/// The exponent order is mass, length, time, temperature, amount of substance,
/// electric current and luminous intensity, matching the annotation written in
/// front of every solver field (`[0 2 -1 0 0 0 0]` for a kinematic viscosity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimension([i8; 7]);

impl Dimension {
    /// Dimensionless quantity.
    pub const NONE: Self = Self([0; 7]);
    /// Mass `[kg]`.
    pub const MASS: Self = Self([1, 0, 0, 0, 0, 0, 0]);
    /// Length `[m]`.
    pub const LENGTH: Self = Self([0, 1, 0, 0, 0, 0, 0]);
    /// Time `[s]`.
    pub const TIME: Self = Self([0, 0, 1, 0, 0, 0, 0]);
    /// Temperature `[K]`.
    pub const TEMPERATURE: Self = Self([0, 0, 0, 1, 0, 0, 0]);
    /// Velocity `[m/s]`.
    pub const VELOCITY: Self = Self([0, 1, -1, 0, 0, 0, 0]);
    /// Static pressure `[kg/(m s^2)]`.
    pub const PRESSURE: Self = Self([1, -1, -2, 0, 0, 0, 0]);
    /// Density `[kg/m^3]`.
    pub const DENSITY: Self = Self([1, -3, 0, 0, 0, 0, 0]);
    /// Dynamic viscosity `[kg/(m s)]`.
    pub const DYNAMIC_VISCOSITY: Self = Self([1, -1, -1, 0, 0, 0, 0]);
    /// Kinematic viscosity `[m^2/s]`.
    pub const KINEMATIC_VISCOSITY: Self = Self([0, 2, -1, 0, 0, 0, 0]);
    /// Turbulent kinetic energy `[m^2/s^2]`.
    pub const TURBULENT_KINETIC_ENERGY: Self = Self([0, 2, -2, 0, 0, 0, 0]);
    /// Turbulent dissipation rate `[m^2/s^3]`.
    pub const DISSIPATION_RATE: Self = Self([0, 2, -3, 0, 0, 0, 0]);
    /// Specific dissipation rate `[1/s]`.
    pub const SPECIFIC_DISSIPATION_RATE: Self = Self([0, 0, -1, 0, 0, 0, 0]);

    /// Creates a dimension from raw exponents.
    pub const fn new(exponents: [i8; 7]) -> Self {
        Self(exponents)
    }

    /// Returns the raw exponents.
    pub const fn exponents(&self) -> [i8; 7] {
        self.0
    }

    /// Returns true when every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Raises the dimension to an integer power.
    pub fn powi(self, n: i8) -> Self {
        let mut out = [0i8; 7];
        for (slot, e) in out.iter_mut().zip(self.0) {
            *slot = e * n;
        }
        Self(out)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::NONE
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        let mut out = [0i8; 7];
        for (idx, slot) in out.iter_mut().enumerate() {
            *slot = self.0[idx] + rhs.0[idx];
        }
        Dimension(out)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        let mut out = [0i8; 7];
        for (idx, slot) in out.iter_mut().enumerate() {
            *slot = self.0[idx] - rhs.0[idx];
        }
        Dimension(out)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, e) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}
