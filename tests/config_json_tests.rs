use nav_chart::api::{ReturnCalculatorConfig, TooltipLayout};
use nav_chart::core::{CalculatorDuration, CalculatorMode, Viewport};
use nav_chart::{ChartError, NavChartConfig};

#[test]
fn chart_config_json_roundtrip_preserves_overrides() {
    let config = NavChartConfig::new(Viewport::new(360.0, 220.0))
        .with_max_points(90)
        .with_padding(16.0)
        .with_tooltip(TooltipLayout {
            width: 150.0,
            edge_padding: 4.0,
        })
        .with_currency_symbol("$");

    let json = config.to_json_pretty().expect("serialize");
    let restored = NavChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn malformed_chart_json_is_reported() {
    let err = NavChartConfig::from_json_str("{\"viewport\":").expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("parse")));
}

#[test]
fn chart_config_validation() {
    assert!(NavChartConfig::default().validate().is_ok());
    assert!(NavChartConfig::default().with_max_points(0).validate().is_err());
    assert!(matches!(
        NavChartConfig::default().with_padding(200.0).validate(),
        Err(ChartError::InvalidViewport { .. })
    ));
    let narrow_tooltip = NavChartConfig::default().with_tooltip(TooltipLayout {
        width: 0.0,
        edge_padding: 8.0,
    });
    assert!(narrow_tooltip.validate().is_err());
}

#[test]
fn calculator_config_reads_short_duration_labels() {
    let config = ReturnCalculatorConfig::from_json_str(
        r#"{"mode":"OneTime","duration":"3Y","default_amount":25000}"#,
    )
    .expect("parse");
    assert_eq!(config.mode, CalculatorMode::OneTime);
    assert_eq!(config.duration, CalculatorDuration::ThreeYears);
    assert_eq!(config.default_amount, 25_000.0);
    assert_eq!(config.slider.step, 500.0);
    assert!(config.validate().is_ok());

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"3Y\""));
}
