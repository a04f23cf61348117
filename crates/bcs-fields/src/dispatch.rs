//! Physical type dispatch tables and the read-only scope handlers receive.

use std::str::FromStr;

use bcs_core::{get_enum, paths, BcsError, ConfigAccessor, Dimension, DimensionedValue, ErrorInfo};

use crate::builder::BuildContext;
use crate::catalog::{BoundaryDescriptor, InterfaceMode, PhysicalType};
use crate::entry::BoundaryEntry;
use crate::field::FieldName;
use crate::region::RegionContext;

/// Produces the entry of one boundary for one field.
pub type Handler = fn(&BoundaryScope<'_>) -> Result<BoundaryEntry, BcsError>;

/// Everything a handler may read while producing one entry.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryScope<'a> {
    /// Build pass context.
    pub cx: &'a BuildContext<'a>,
    /// Region the boundary belongs to.
    pub region: &'a RegionContext,
    /// Boundary being dispatched.
    pub boundary: &'a BoundaryDescriptor,
    /// Field being built.
    pub field: FieldName,
}

impl<'a> BoundaryScope<'a> {
    /// Creates a scope.
    pub fn new(
        cx: &'a BuildContext<'a>,
        region: &'a RegionContext,
        boundary: &'a BoundaryDescriptor,
        field: FieldName,
    ) -> Self {
        Self {
            cx,
            region,
            boundary,
            field,
        }
    }

    /// Configuration accessor of the pass.
    pub fn config(&self) -> &'a dyn ConfigAccessor {
        self.cx.config
    }

    /// Absolute path of `sub` inside the boundary subtree.
    pub fn path(&self, sub: &str) -> String {
        format!("{}/{sub}", self.boundary.path)
    }

    /// Raw value below the boundary subtree.
    pub fn value(&self, sub: &str) -> Result<String, BcsError> {
        self.config().get_value(&self.path(sub))
    }

    /// Number below the boundary subtree.
    pub fn f64(&self, sub: &str) -> Result<f64, BcsError> {
        self.config().get_f64(&self.path(sub))
    }

    /// Flag below the boundary subtree.
    pub fn flag(&self, sub: &str) -> Result<bool, BcsError> {
        self.config().get_bool(&self.path(sub))
    }

    /// Vector below the boundary subtree.
    pub fn vector(&self, sub: &str) -> Result<[f64; 3], BcsError> {
        self.config().get_vector(&self.path(sub))
    }

    /// Number list below the boundary subtree.
    pub fn list(&self, sub: &str) -> Result<Vec<f64>, BcsError> {
        self.config().get_list(&self.path(sub))
    }

    /// Closed enum below the boundary subtree.
    pub fn select<T: FromStr>(&self, sub: &str) -> Result<T, BcsError> {
        get_enum(self.config(), &self.path(sub))
    }

    /// Number from the case wide atmospheric boundary layer settings.
    pub fn abl_f64(&self, leaf: &str) -> Result<f64, BcsError> {
        self.config().get_f64(&format!("{}/{leaf}", paths::ABL))
    }

    /// Vector from the case wide atmospheric boundary layer settings.
    pub fn abl_vector(&self, leaf: &str) -> Result<[f64; 3], BcsError> {
        self.config().get_vector(&format!("{}/{leaf}", paths::ABL))
    }

    /// Operating pressure added to gauge pressures.
    pub fn operating_pressure(&self) -> Result<f64, BcsError> {
        self.config().get_f64(paths::OPERATING_PRESSURE)
    }

    /// Dimension of the field being built.
    pub fn dimension(&self) -> Dimension {
        self.field.dimension()
    }

    /// Scalar carrying the field dimension.
    pub fn scalar(&self, value: f64) -> DimensionedValue {
        DimensionedValue::scalar(value, self.dimension())
    }

    /// Vector carrying the field dimension.
    pub fn vector_value(&self, value: [f64; 3]) -> DimensionedValue {
        DimensionedValue::vector(value, self.dimension())
    }

    /// Cached initial value of the field being built.
    pub fn initial(&self) -> Result<DimensionedValue, BcsError> {
        self.region.derived_initial(self.cx, self.field)
    }
}

#[derive(Clone, Copy)]
enum Route {
    Direct(Handler),
    Interface { coupled: Handler, periodic: Handler },
}

/// Total map from [`PhysicalType`] to handler for one field.
pub struct DispatchTable {
    field: FieldName,
    routes: Vec<Route>,
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("field", &self.field)
            .field("routes", &self.routes.len())
            .finish()
    }
}

impl DispatchTable {
    /// Field the table serves.
    pub fn field(&self) -> FieldName {
        self.field
    }

    /// Routes the boundary of `scope` to its handler.
    ///
    /// Interface boundaries read their mode first: region coupling goes to the
    /// coupled handler, periodic modes to the periodic one.
    pub fn dispatch(&self, scope: &BoundaryScope<'_>) -> Result<BoundaryEntry, BcsError> {
        match self.routes[scope.boundary.physical_type.index()] {
            Route::Direct(handler) => handler(scope),
            Route::Interface { coupled, periodic } => {
                let mode: InterfaceMode = scope.select("interface/mode")?;
                if mode.is_periodic() {
                    periodic(scope)
                } else {
                    coupled(scope)
                }
            }
        }
    }
}

/// Collects registrations and checks them for totality.
pub struct DispatchTableBuilder {
    field: FieldName,
    routes: [Option<Route>; PhysicalType::COUNT],
    duplicates: Vec<PhysicalType>,
}

impl DispatchTableBuilder {
    /// Starts an empty table for `field`.
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            routes: [None; PhysicalType::COUNT],
            duplicates: Vec::new(),
        }
    }

    fn insert(mut self, physical_type: PhysicalType, route: Route) -> Self {
        let slot = &mut self.routes[physical_type.index()];
        if slot.is_some() {
            self.duplicates.push(physical_type);
        }
        *slot = Some(route);
        self
    }

    /// Registers `handler` for one physical type.
    pub fn register(self, physical_type: PhysicalType, handler: Handler) -> Self {
        self.insert(physical_type, Route::Direct(handler))
    }

    /// Registers `handler` for several physical types.
    pub fn register_all(self, physical_types: &[PhysicalType], handler: Handler) -> Self {
        physical_types
            .iter()
            .fold(self, |builder, pt| builder.register(*pt, handler))
    }

    /// Registers the two-level interface route.
    pub fn register_interface(self, coupled: Handler, periodic: Handler) -> Self {
        self.insert(PhysicalType::Interface, Route::Interface { coupled, periodic })
    }

    /// Finishes the table; fails unless every physical type has exactly one
    /// registration.
    pub fn build(self) -> Result<DispatchTable, BcsError> {
        let missing: Vec<&str> = PhysicalType::ALL
            .iter()
            .filter(|pt| self.routes[pt.index()].is_none())
            .map(|pt| pt.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(BcsError::Dispatch(
                ErrorInfo::new("missing-handlers", "dispatch table is not total")
                    .with_context("field", self.field.as_str())
                    .with_context("missing", missing.join(",")),
            ));
        }
        if !self.duplicates.is_empty() {
            let names: Vec<&str> = self.duplicates.iter().map(|pt| pt.as_str()).collect();
            return Err(BcsError::Dispatch(
                ErrorInfo::new("duplicate-handlers", "physical type registered twice")
                    .with_context("field", self.field.as_str())
                    .with_context("duplicates", names.join(",")),
            ));
        }
        Ok(DispatchTable {
            field: self.field,
            routes: self.routes.into_iter().flatten().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_gradient(_: &BoundaryScope<'_>) -> Result<BoundaryEntry, BcsError> {
        Ok(BoundaryEntry::ZeroGradient)
    }

    #[test]
    fn missing_types_are_named() {
        let err = DispatchTableBuilder::new(FieldName::T)
            .register(PhysicalType::Wall, zero_gradient)
            .build()
            .expect_err("table is partial");
        let info = err.info();
        assert_eq!(info.code, "missing-handlers");
        let missing = &info.context["missing"];
        assert!(missing.contains("velocityInlet"));
        assert!(!missing.contains("wall"));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let err = DispatchTableBuilder::new(FieldName::T)
            .register_all(PhysicalType::ALL, zero_gradient)
            .register(PhysicalType::Wall, zero_gradient)
            .build()
            .expect_err("wall registered twice");
        assert_eq!(err.info().code, "duplicate-handlers");
    }

    #[test]
    fn total_table_builds() {
        let table = DispatchTableBuilder::new(FieldName::U)
            .register_all(PhysicalType::ALL, zero_gradient)
            .build()
            .expect("total");
        assert_eq!(table.field(), FieldName::U);
    }
}
