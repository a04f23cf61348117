#![deny(missing_docs)]
#![doc = "Dimensioned values, configuration access and shared error types for the boundary field synthesis engine."]

pub mod config;
pub mod dimension;
pub mod errors;
/// Stable content hashing.
pub mod hash;
pub mod serde;
pub mod store;
pub mod value;

pub use config::{get_enum, paths, BoundaryRecord, ConfigAccessor};
pub use dimension::Dimension;
pub use errors::{BcsError, ErrorInfo};
pub use hash::stable_hash_string;
pub use store::CaseStore;
pub use value::{DimensionedValue, Magnitude};
