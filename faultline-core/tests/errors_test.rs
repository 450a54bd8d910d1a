use faultline_core::errors::*;

#[test]
fn taxonomy_error_duplicate_definition_carries_id() {
    let err = TaxonomyError::DuplicateDefinition {
        id: "factual_incorrect".into(),
    };
    assert!(
        err.to_string().contains("factual_incorrect"),
        "error should contain the definition id"
    );
}

#[test]
fn taxonomy_error_unknown_category_carries_both_names() {
    let err = TaxonomyError::UnknownCategory {
        id: "custom_type".into(),
        name: "grammar".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("custom_type"));
    assert!(msg.contains("grammar"));
}

#[test]
fn taxonomy_error_parse_error_carries_path() {
    let err = TaxonomyError::ParseError {
        path: "extra.toml".into(),
        message: "expected table".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("extra.toml"));
    assert!(msg.contains("expected table"));
}

#[test]
fn config_error_validation_carries_field() {
    let err = ConfigError::ValidationFailed {
        field: "judgment.timeout_ms".into(),
        message: "must be greater than 0".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("judgment.timeout_ms"));
    assert!(msg.contains("greater than 0"));
}

#[test]
fn judgment_error_timeout_carries_duration() {
    let err = JudgmentError::Timeout { timeout_ms: 10_000 };
    assert!(err.to_string().contains("10000"));
}
