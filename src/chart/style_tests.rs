//! Tests for SVG styling primitives.

use super::*;

mod chart_color_tests {
    use super::*;

    #[test]
    fn css_var_format() {
        let color = ChartColor::css_var("text-muted");
        assert_eq!(color.to_css(), "var(--color-text-muted)");
    }

    #[test]
    fn hex_format() {
        let color = ChartColor::hex("#10b981");
        assert_eq!(color.to_css(), "#10b981");
    }

    #[test]
    fn parses_css_var_string() {
        let color = ChartColor::from("var(--color-chart-primary)");
        assert_eq!(color, ChartColor::css_var("chart-primary"));
    }

    #[test]
    fn plain_string_is_literal() {
        assert_eq!(ChartColor::from("tomato"), ChartColor::hex("tomato"));
    }

    #[test]
    fn serde_uses_css_string() {
        let json = serde_json::to_string(&ChartColor::css_var("border")).unwrap();
        assert_eq!(json, "\"var(--color-border)\"");

        let parsed: ChartColor = serde_json::from_str("\"#3b82f6\"").unwrap();
        assert_eq!(parsed, ChartColor::hex("#3b82f6"));
    }
}

mod text_anchor_tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(format!("{}", TextAnchor::Start), "start");
        assert_eq!(format!("{}", TextAnchor::Middle), "middle");
        assert_eq!(format!("{}", TextAnchor::End), "end");
    }

    #[test]
    fn default_is_start() {
        assert!(matches!(TextAnchor::default(), TextAnchor::Start));
    }
}
