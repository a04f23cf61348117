//! Structured error types shared across BCS crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`BcsError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (configuration paths, field names, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the boundary field synthesis engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum BcsError {
    /// Missing or malformed case configuration.
    #[error("configuration error: {0}")]
    Config(ErrorInfo),
    /// Thermophysical property lookups that could not be evaluated.
    #[error("property error: {0}")]
    Property(ErrorInfo),
    /// Defects in a field's dispatch table or in the entries it produced.
    #[error("dispatch error: {0}")]
    Dispatch(ErrorInfo),
    /// Conflicts while merging field specifications into a case.
    #[error("assembly error: {0}")]
    Assembly(ErrorInfo),
    /// Serialization, schema and IO errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl BcsError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            BcsError::Config(info)
            | BcsError::Property(info)
            | BcsError::Dispatch(info)
            | BcsError::Assembly(info)
            | BcsError::Serde(info) => info,
        }
    }

    /// Configuration lookup for a path that does not exist in the store.
    pub fn path_not_found(path: &str) -> Self {
        BcsError::Config(
            ErrorInfo::new("path-not-found", "configuration path does not exist")
                .with_context("path", path),
        )
    }

    /// Configuration value present but not parseable as the requested type.
    pub fn invalid_value(path: &str, value: &str, expected: &str) -> Self {
        BcsError::Config(
            ErrorInfo::new("invalid-value", format!("expected {expected}"))
                .with_context("path", path)
                .with_context("value", value),
        )
    }

    /// Returns the configuration path attached to the error, if any.
    pub fn path(&self) -> Option<&str> {
        self.info().context.get("path").map(String::as_str)
    }
}
