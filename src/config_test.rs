#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn empty_object_gives_defaults() {
    let config = ChartConfig::from_json_str("{}").unwrap();
    assert_eq!(config, ChartConfig::default());
    assert!(config.show_legend);
    assert!(config.show_labels);
}

#[test]
fn nested_layout_override() {
    let config = ChartConfig::from_json_str(r#"{"layout": {"tooth_width": 40}, "show_legend": false}"#).unwrap();
    assert_eq!(config.layout.tooth_width, 40.0);
    assert_eq!(config.layout.tooth_gap, ChartLayout::default().tooth_gap);
    assert!(!config.show_legend);
}

#[test]
fn wrong_types_are_errors() {
    assert!(matches!(ChartConfig::from_json_str(r#"{"show_legend": "yes"}"#), Err(ChartError::Json(_))));
    assert!(ChartConfig::from_json_str("not json").is_err());
}

#[test]
fn content_size_includes_legend_when_shown() {
    let mut config = ChartConfig::default();
    let (w, h) = config.content_size();
    assert_eq!(w, config.layout.width());
    assert_eq!(h, config.layout.height() + config.legend_height);
    config.show_legend = false;
    assert_eq!(config.content_size().1, config.layout.height());
}
