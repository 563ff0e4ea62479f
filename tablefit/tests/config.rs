use tablefit::{ColumnConfig, ConfigError};

#[test]
fn test_defaults() {
    let config = ColumnConfig::default();
    assert_eq!(config.max_table_width_fraction, 0.8);
    assert_eq!(config.min_column_width, 50.0);
    assert_eq!(config.single_column_max_fraction, 1.0);
    assert_eq!(config.multi_column_max_fraction, 0.5);
    assert_eq!(config.char_width_px, 7.0);
    assert_eq!(config.padding_px, 32.0);
    assert_eq!(config.cjk_char_weight, 2.0);
    assert_eq!(config.other_char_weight, 1.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_max_column_width_depends_on_column_count() {
    let config = ColumnConfig::default();
    assert_eq!(config.max_column_width(320.0, 0), 320.0);
    assert_eq!(config.max_column_width(320.0, 1), 320.0);
    assert_eq!(config.max_column_width(320.0, 2), 160.0);
    assert_eq!(config.max_column_width(320.0, 20), 160.0);
}

#[test]
fn test_builder() {
    let config = ColumnConfig::new()
        .min_column_width(64.0)
        .char_width_px(8.0)
        .padding_px(16.0);

    assert_eq!(config.min_column_width, 64.0);
    assert_eq!(config.char_width_px, 8.0);
    assert_eq!(config.padding_px, 16.0);
    assert_eq!(config.max_table_width_fraction, 0.8);
}

// ============================================================================
// JSON Tests
// ============================================================================

#[test]
fn test_from_json_partial_override() {
    let config = ColumnConfig::from_json(r#"{ "minColumnWidth": 80, "charWidthPx": 8 }"#)
        .expect("valid config");

    assert_eq!(config.min_column_width, 80.0);
    assert_eq!(config.char_width_px, 8.0);
    assert_eq!(config.padding_px, 32.0);
    assert_eq!(config.multi_column_max_fraction, 0.5);
}

#[test]
fn test_from_json_empty_object_is_default() {
    let config = ColumnConfig::from_json("{}").expect("valid config");
    assert_eq!(config, ColumnConfig::default());
}

#[test]
fn test_from_json_parse_error() {
    let err = ColumnConfig::from_json("{ minColumnWidth: }").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = ColumnConfig::from_json(r#"{ "paddingPx": "wide" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_serialized_keys_are_camel_case() {
    let json = serde_json::to_value(ColumnConfig::default()).expect("serializable");
    assert_eq!(json["maxTableWidthFraction"], serde_json::json!(0.8f32));
    assert_eq!(json["cjkCharWeight"], serde_json::json!(2.0));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_fraction_out_of_range() {
    let err = ColumnConfig::from_json(r#"{ "maxTableWidthFraction": 1.5 }"#).unwrap_err();
    match err {
        ConfigError::Invalid { field, .. } => assert_eq!(field, "maxTableWidthFraction"),
        other => panic!("unexpected error: {other}"),
    }

    let config = ColumnConfig::default().multi_column_max_fraction(0.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid {
            field: "multiColumnMaxFraction",
            ..
        })
    ));
}

#[test]
fn test_min_column_width_must_be_positive() {
    let config = ColumnConfig::default().min_column_width(0.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid {
            field: "minColumnWidth",
            ..
        })
    ));
}

#[test]
fn test_negative_values_rejected() {
    let config = ColumnConfig::default().padding_px(-1.0);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::Invalid {
            field: "paddingPx",
            ..
        })
    ));

    let config = ColumnConfig::default().other_char_weight(-0.5);
    assert!(config.validate().is_err());
}

#[test]
fn test_non_finite_rejected() {
    let config = ColumnConfig::default().char_width_px(f32::INFINITY);
    assert!(config.validate().is_err());

    let config = ColumnConfig::default().single_column_max_fraction(f32::NAN);
    assert!(config.validate().is_err());
}

#[test]
fn test_error_message() {
    let err = ColumnConfig::default()
        .min_column_width(-5.0)
        .validate()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid column config field 'minColumnWidth' = -5: must be greater than zero"
    );
}
