use xy_decimation::decimation::{DecimationMode, ScalingMode};
use xy_decimation::render::{Color, SeriesStyle};
use xy_decimation::{ChartError, PainterConfig};

#[test]
fn config_json_roundtrip_keeps_every_field() {
    let config = PainterConfig::relative(2.5, 12.0)
        .with_mode(DecimationMode::Fast)
        .with_style(SeriesStyle::line(Color::rgb(0.2, 0.3, 0.4)).with_fill(Color::rgba(
            0.2, 0.3, 0.4, 0.5,
        )));

    let json = config.to_json_pretty().expect("serialize");
    let restored = PainterConfig::from_json_str(&json).expect("parse");

    assert_eq!(restored, config);
    assert!(json.contains("\"fast\""));
    assert!(json.contains("\"relative\""));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = PainterConfig::from_json_str("{}").expect("parse");

    assert_eq!(config, PainterConfig::default());
    assert_eq!(config.mode, DecimationMode::MinMax);
    assert_eq!(config.scaling, ScalingMode::Absolute);
    assert_eq!(config.line_width, 1.0);
}

#[test]
fn mode_parses_from_lowercase_json() {
    let config = PainterConfig::from_json_str(r#"{ "mode": "fast", "line_width": 3.0 }"#)
        .expect("parse");

    assert_eq!(config.mode, DecimationMode::Fast);
    assert_eq!(config.line_width, 3.0);
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let negative_width = PainterConfig::from_json_str(r#"{ "line_width": -1.0 }"#);
    assert!(matches!(negative_width, Err(ChartError::InvalidData(_))));

    let negative_offset = PainterConfig::from_json_str(
        r#"{ "scaling": { "type": "relative", "max_value_offset": -3.0 } }"#,
    );
    assert!(matches!(negative_offset, Err(ChartError::InvalidData(_))));

    let garbage = PainterConfig::from_json_str("not json");
    assert!(matches!(garbage, Err(ChartError::InvalidData(_))));
}

#[test]
fn mode_property_is_case_insensitive_and_defaults_to_minmax() {
    assert_eq!(DecimationMode::from_property(Some("fast")), DecimationMode::Fast);
    assert_eq!(DecimationMode::from_property(Some("FAST")), DecimationMode::Fast);
    assert_eq!(DecimationMode::from_property(Some("minmax")), DecimationMode::MinMax);
    assert_eq!(DecimationMode::from_property(Some("other")), DecimationMode::MinMax);
    assert_eq!(DecimationMode::from_property(None), DecimationMode::MinMax);

    let config = PainterConfig::default().with_mode_property(Some("Fast"));
    assert_eq!(config.mode, DecimationMode::Fast);
    assert_eq!(config.mode.to_string(), "fast");
}
