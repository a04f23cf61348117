//! Numeric values tagged with their physical dimension.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::errors::{BcsError, ErrorInfo};

/// Shape and numbers carried by a [`DimensionedValue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    /// Single uniform number.
    Scalar(f64),
    /// Uniform three-component vector.
    Vector([f64; 3]),
    /// Ordered list of numbers (polynomial coefficients, profiles).
    List(Vec<f64>),
    /// Time table of `(time, value)` pairs.
    Table(Vec<(f64, f64)>),
}

/// A magnitude together with its seven-exponent dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionedValue {
    /// Numbers carried by the value.
    pub magnitude: Magnitude,
    /// Physical dimension of every number in the magnitude.
    pub dimension: Dimension,
}

fn shape_error(op: &str, lhs: &DimensionedValue, rhs: &DimensionedValue) -> BcsError {
    BcsError::Dispatch(
        ErrorInfo::new("shape-mismatch", format!("{op} requires scalar operands"))
            .with_context("lhs", lhs.dimension.to_string())
            .with_context("rhs", rhs.dimension.to_string()),
    )
}

impl DimensionedValue {
    /// Creates a dimensioned scalar.
    pub fn scalar(value: f64, dimension: Dimension) -> Self {
        Self {
            magnitude: Magnitude::Scalar(value),
            dimension,
        }
    }

    /// Creates a dimensioned vector.
    pub fn vector(value: [f64; 3], dimension: Dimension) -> Self {
        Self {
            magnitude: Magnitude::Vector(value),
            dimension,
        }
    }

    /// Creates a dimensioned list.
    pub fn list(values: Vec<f64>, dimension: Dimension) -> Self {
        Self {
            magnitude: Magnitude::List(values),
            dimension,
        }
    }

    /// Creates a dimensioned `(time, value)` table.
    pub fn table(rows: Vec<(f64, f64)>, dimension: Dimension) -> Self {
        Self {
            magnitude: Magnitude::Table(rows),
            dimension,
        }
    }

    /// Returns the scalar magnitude, if the value is a scalar.
    pub fn as_scalar(&self) -> Option<f64> {
        match self.magnitude {
            Magnitude::Scalar(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the vector magnitude, if the value is a vector.
    pub fn as_vector(&self) -> Option<[f64; 3]> {
        match self.magnitude {
            Magnitude::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Euclidean norm of a vector value, or absolute value of a scalar.
    pub fn norm(&self) -> Option<f64> {
        match &self.magnitude {
            Magnitude::Scalar(v) => Some(v.abs()),
            Magnitude::Vector(v) => Some((v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()),
            _ => None,
        }
    }

    /// Multiplies every number by a dimensionless factor.
    pub fn scale(&self, factor: f64) -> Self {
        let magnitude = match &self.magnitude {
            Magnitude::Scalar(v) => Magnitude::Scalar(v * factor),
            Magnitude::Vector(v) => Magnitude::Vector([v[0] * factor, v[1] * factor, v[2] * factor]),
            Magnitude::List(values) => Magnitude::List(values.iter().map(|v| v * factor).collect()),
            Magnitude::Table(rows) => {
                Magnitude::Table(rows.iter().map(|(t, v)| (*t, v * factor)).collect())
            }
        };
        Self {
            magnitude,
            dimension: self.dimension,
        }
    }

    /// Product of two scalars; the dimensions combine.
    pub fn times(&self, rhs: &DimensionedValue) -> Result<Self, BcsError> {
        match (self.as_scalar(), rhs.as_scalar()) {
            (Some(a), Some(b)) => Ok(Self::scalar(a * b, self.dimension * rhs.dimension)),
            _ => Err(shape_error("multiplication", self, rhs)),
        }
    }

    /// Quotient of two scalars; the dimensions combine.
    pub fn over(&self, rhs: &DimensionedValue) -> Result<Self, BcsError> {
        match (self.as_scalar(), rhs.as_scalar()) {
            (Some(a), Some(b)) => Ok(Self::scalar(a / b, self.dimension / rhs.dimension)),
            _ => Err(shape_error("division", self, rhs)),
        }
    }

    /// Integer power of a scalar.
    pub fn powi(&self, n: i8) -> Result<Self, BcsError> {
        match self.as_scalar() {
            Some(v) => Ok(Self::scalar(v.powi(i32::from(n)), self.dimension.powi(n))),
            None => Err(shape_error("power", self, self)),
        }
    }

    /// Sum of two scalars of identical dimension.
    pub fn plus(&self, rhs: &DimensionedValue) -> Result<Self, BcsError> {
        self.ensure_dimension(rhs.dimension)?;
        match (self.as_scalar(), rhs.as_scalar()) {
            (Some(a), Some(b)) => Ok(Self::scalar(a + b, self.dimension)),
            _ => Err(shape_error("addition", self, rhs)),
        }
    }

    /// Fails with `dimension-mismatch` unless the value carries `expected`.
    pub fn ensure_dimension(&self, expected: Dimension) -> Result<(), BcsError> {
        if self.dimension == expected {
            return Ok(());
        }
        Err(BcsError::Dispatch(
            ErrorInfo::new("dimension-mismatch", "value dimension differs from expected")
                .with_context("expected", expected.to_string())
                .with_context("actual", self.dimension.to_string()),
        ))
    }
}
