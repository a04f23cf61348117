//! In-memory configuration store backed by flattened YAML.

use indexmap::IndexMap;
use serde_yaml::Value;

use crate::config::{parse_finite, paths, BoundaryRecord, ConfigAccessor};
use crate::errors::{BcsError, ErrorInfo};

fn yaml_error(code: &str, err: impl ToString) -> BcsError {
    BcsError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Path addressed case configuration kept in declaration order.
///
/// Nested YAML mappings are flattened into slash separated paths. Sequences of
/// scalars are stored as whitespace separated strings, which is how vectors and
/// number lists are read back by [`ConfigAccessor::get_vector`] and
/// [`ConfigAccessor::get_list`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseStore {
    values: IndexMap<String, String>,
}

impl CaseStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from a YAML document.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, BcsError> {
        let root: Value =
            serde_yaml::from_slice(data).map_err(|err| yaml_error("yaml-deserialize", err))?;
        let mut store = Self::new();
        match root {
            Value::Mapping(_) => store.flatten("", &root)?,
            Value::Null => {}
            _ => {
                return Err(BcsError::Serde(ErrorInfo::new(
                    "case-root",
                    "case document must be a mapping",
                )))
            }
        }
        Ok(store)
    }

    /// Builds a store from a YAML string.
    pub fn from_yaml_str(text: &str) -> Result<Self, BcsError> {
        Self::from_yaml_slice(text.as_bytes())
    }

    fn flatten(&mut self, prefix: &str, value: &Value) -> Result<(), BcsError> {
        match value {
            Value::Mapping(map) => {
                for (key, child) in map {
                    let key = scalar_text(key).ok_or_else(|| {
                        BcsError::Serde(
                            ErrorInfo::new("case-key", "mapping keys must be scalars")
                                .with_context("path", prefix),
                        )
                    })?;
                    let path = if prefix.is_empty() {
                        key
                    } else {
                        format!("{prefix}/{key}")
                    };
                    self.flatten(&path, child)?;
                }
                Ok(())
            }
            Value::Sequence(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    let text = scalar_text(item).ok_or_else(|| {
                        BcsError::Serde(
                            ErrorInfo::new("case-sequence", "sequences may only hold scalars")
                                .with_context("path", prefix),
                        )
                    })?;
                    parts.push(text);
                }
                self.set(prefix, parts.join(" "));
                Ok(())
            }
            Value::Tagged(tagged) => self.flatten(prefix, &tagged.value),
            other => {
                if let Some(text) = scalar_text(other) {
                    self.set(prefix, text);
                }
                Ok(())
            }
        }
    }

    /// Stores `value` at `path`, replacing any previous value.
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.values.insert(path.into(), value.into());
    }

    /// Stores a three-component vector at `path`.
    pub fn set_vector(&mut self, path: impl Into<String>, value: [f64; 3]) {
        self.set(path, format!("{} {} {}", value[0], value[1], value[2]));
    }

    /// Removes the value stored at `path`.
    pub fn remove(&mut self, path: &str) -> Option<String> {
        self.values.shift_remove(path)
    }

    /// Declares a boundary and its physical type; returns its subtree path.
    pub fn add_boundary(&mut self, region: &str, id: u64, name: &str, physical_type: &str) -> String {
        let root = paths::boundary(region, id);
        self.set(format!("{root}/name"), name);
        self.set(format!("{root}/physicalType"), physical_type);
        root
    }

    /// Number of stored paths.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when the store holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn has_region(&self, region: &str) -> bool {
        let prefix = format!("{}/", paths::region(region));
        self.values.keys().any(|key| key.starts_with(&prefix))
    }

    /// Identifiers of `<prefix><id>/<leaf>` entries in declaration order.
    fn child_ids<'a>(&'a self, prefix: &'a str, leaf: &'a str) -> impl Iterator<Item = (u64, &'a str)> + 'a {
        self.values.iter().filter_map(move |(key, value)| {
            let rest = key.strip_prefix(prefix)?;
            let (id, tail) = rest.split_once('/')?;
            if tail != leaf {
                return None;
            }
            id.parse::<u64>().ok().map(|id| (id, value.as_str()))
        })
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

impl ConfigAccessor for CaseStore {
    fn get_value(&self, path: &str) -> Result<String, BcsError> {
        self.values
            .get(path)
            .cloned()
            .ok_or_else(|| BcsError::path_not_found(path))
    }

    fn get_vector(&self, path: &str) -> Result<[f64; 3], BcsError> {
        let raw = self.get_value(path)?;
        let parts = raw
            .split_whitespace()
            .map(parse_finite)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| BcsError::invalid_value(path, &raw, "a vector of three finite numbers"))?;
        match parts.as_slice() {
            [x, y, z] => Ok([*x, *y, *z]),
            _ => Err(BcsError::invalid_value(path, &raw, "a vector of three numbers")),
        }
    }

    fn get_boundary_conditions(&self, region: &str) -> Result<Vec<BoundaryRecord>, BcsError> {
        if !self.has_region(region) {
            return Err(BcsError::path_not_found(&paths::region(region)));
        }
        let prefix = format!("{}/boundaryConditions/", paths::region(region));
        self.child_ids(&prefix, "name")
            .map(|(id, name)| {
                let physical_type =
                    self.get_value(&format!("{}/physicalType", paths::boundary(region, id)))?;
                Ok(BoundaryRecord {
                    id,
                    name: name.to_string(),
                    physical_type,
                })
            })
            .collect()
    }

    fn get_cell_zones_by_type(&self, region: &str, zone_type: &str) -> Result<Vec<u64>, BcsError> {
        if !self.has_region(region) {
            return Err(BcsError::path_not_found(&paths::region(region)));
        }
        let prefix = format!("{}/cellZones/", paths::region(region));
        Ok(self
            .child_ids(&prefix, "zoneType")
            .filter(|(_, kind)| *kind == zone_type)
            .map(|(id, _)| id)
            .collect())
    }

    fn region_names(&self) -> Result<Vec<String>, BcsError> {
        let mut names: Vec<String> = Vec::new();
        for key in self.values.keys() {
            if let Some(rest) = key.strip_prefix("regions/") {
                if let Some((name, _)) = rest.split_once('/') {
                    if !names.iter().any(|existing| existing == name) {
                        names.push(name.to_string());
                    }
                }
            }
        }
        Ok(names)
    }
}
