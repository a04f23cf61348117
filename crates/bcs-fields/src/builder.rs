//! The field builder contract and the context of a build pass.

use bcs_core::{BcsError, ConfigAccessor, Dimension, DimensionedValue, ErrorInfo};
use bcs_thermo::{EquationOfState, ThermoResolver};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::dispatch::{BoundaryScope, DispatchTable};
use crate::entry::{BoundaryEntry, EntryKind};
use crate::field::{FieldName, FieldSpecification};
use crate::region::RegionContext;

/// Read-only inputs shared by every builder of one pass.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
    /// Case configuration.
    pub config: &'a dyn ConfigAccessor,
    /// Thermophysical property resolver.
    pub resolver: ThermoResolver<'a>,
}

impl std::fmt::Debug for BuildContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildContext")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}

impl<'a> BuildContext<'a> {
    /// Creates a context over a configuration and a property provider.
    pub fn new(config: &'a dyn ConfigAccessor, provider: &'a dyn EquationOfState) -> Self {
        Self {
            config,
            resolver: ThermoResolver::new(provider),
        }
    }
}

fn check_entry(
    field: FieldName,
    boundary: &str,
    entry: &BoundaryEntry,
    supported: &[EntryKind],
    dimension: Dimension,
) -> Result<(), BcsError> {
    let kind = entry.kind();
    if !entry.is_marker() && !supported.contains(&kind) {
        return Err(BcsError::Dispatch(
            ErrorInfo::new("unsupported-kind", "entry kind not valid for field")
                .with_context("field", field.as_str())
                .with_context("boundary", boundary)
                .with_context("kind", kind.solver_type()),
        ));
    }
    for value in entry.dimensioned_values() {
        value.ensure_dimension(dimension).map_err(|err| {
            let mut info = err.info().clone();
            info.context.insert("field".into(), field.as_str().into());
            info.context.insert("boundary".into(), boundary.into());
            BcsError::Dispatch(info)
        })?;
    }
    Ok(())
}

/// Builds the specification of one field for one region.
pub trait FieldBuilder: Send + Sync {
    /// Field produced.
    fn field(&self) -> FieldName;

    /// Dimension of every value of the field.
    fn dimension(&self) -> Dimension {
        self.field().dimension()
    }

    /// Entry kinds the field may contain, markers aside.
    fn supported_kinds(&self) -> &'static [EntryKind];

    /// Whether the field exists for `region` under the active models.
    fn is_active(&self, region: &RegionContext) -> bool;

    /// Uniform interior value.
    fn internal_field(
        &self,
        cx: &BuildContext<'_>,
        region: &RegionContext,
    ) -> Result<DimensionedValue, BcsError> {
        region.derived_initial(cx, self.field())
    }

    /// Dispatch table of the field.
    fn table(&self) -> &DispatchTable;

    /// Specification of the field, or `None` when the field is inactive.
    fn build(
        &self,
        cx: &BuildContext<'_>,
        region: &RegionContext,
    ) -> Result<Option<FieldSpecification>, BcsError> {
        let field = self.field();
        if !self.is_active(region) {
            debug!(region = %region.name, %field, "field inactive");
            return Ok(None);
        }
        let dimension = self.dimension();
        let internal_field = self.internal_field(cx, region)?;
        internal_field.ensure_dimension(dimension)?;

        let mut boundary_field = IndexMap::with_capacity(region.boundaries.len());
        for boundary in &region.boundaries {
            let scope = BoundaryScope::new(cx, region, boundary, field);
            let entry = self.table().dispatch(&scope)?;
            check_entry(field, &boundary.name, &entry, self.supported_kinds(), dimension)?;
            if let BoundaryEntry::Unsupported { reason } = &entry {
                warn!(region = %region.name, %field, boundary = %boundary.name, %reason, "unsupported boundary combination");
            } else {
                debug!(region = %region.name, %field, boundary = %boundary.name, kind = %entry.kind(), "dispatched");
            }
            if boundary_field.insert(boundary.name.clone(), entry).is_some() {
                return Err(BcsError::Config(
                    ErrorInfo::new("duplicate-boundary", "boundary name used twice in region")
                        .with_context("region", region.name.as_str())
                        .with_context("boundary", boundary.name.as_str()),
                ));
            }
        }

        Ok(Some(FieldSpecification {
            field,
            region: region.name.clone(),
            dimension,
            internal_field,
            boundary_field,
        }))
    }
}
