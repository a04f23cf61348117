use bcs_core::errors::{BcsError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("path", "regions/fluid/material")
        .with_context("reason", "example")
}

#[test]
fn config_error_surface() {
    let err = BcsError::Config(sample_info("path-not-found", "missing"));
    assert_eq!(err.info().code, "path-not-found");
    assert_eq!(err.path(), Some("regions/fluid/material"));
}

#[test]
fn property_error_surface() {
    let err = BcsError::Property(sample_info("unsupported-phase", "solid"));
    assert_eq!(err.info().code, "unsupported-phase");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn path_not_found_names_the_path() {
    let err = BcsError::path_not_found("operatingConditions/pressure");
    assert!(matches!(err, BcsError::Config(_)));
    assert_eq!(err.path(), Some("operatingConditions/pressure"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("configuration error:"));
    assert!(rendered.contains("path=operatingConditions/pressure"));
}

#[test]
fn errors_survive_json() {
    let err = BcsError::Dispatch(sample_info("missing-handlers", "wedge").with_hint("register it"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Dispatch\""));
    let decoded: BcsError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
