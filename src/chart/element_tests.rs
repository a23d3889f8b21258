//! Tests for primitive SVG elements.

use super::*;

mod bar_tests {
    use super::*;

    fn bar(label: &str) -> Bar {
        Bar {
            x: 10.0,
            y: 20.0,
            width: 50.0,
            height: 80.0,
            color: ChartColor::hex("#22c55e"),
            label: label.to_string(),
            value: 100.0,
        }
    }

    #[test]
    fn bar_renders_with_title() {
        let svg = bar("Hired").render();
        assert!(svg.contains("<rect"));
        assert!(svg.contains("<title>Hired: 100</title>"));
        assert!(svg.contains("fill=\"#22c55e\""));
    }

    #[test]
    fn bar_escapes_special_characters() {
        let svg = bar("Test <script>").render();
        assert!(svg.contains("&lt;script&gt;"));
        assert!(!svg.contains("<script>"));
    }
}

mod polyline_tests {
    use super::*;

    #[test]
    fn renders_points_in_order() {
        let line = Polyline::new(vec![(0.0, 10.0), (5.0, 20.0)], ChartColor::hex("#000"))
            .with_stroke_width(3.0);
        let svg = line.render();
        assert!(svg.contains(r#"points="0,10 5,20""#));
        assert!(svg.contains(r#"stroke-width="3""#));
    }

    #[test]
    fn empty_polyline_renders_nothing() {
        let line = Polyline::new(Vec::new(), ChartColor::hex("#000"));
        assert!(line.render().is_empty());
    }
}

mod wedge_tests {
    use super::*;

    fn wedge(start: f64, end: f64) -> Wedge {
        Wedge {
            cx: 50.0,
            cy: 50.0,
            radius: 50.0,
            start_angle: start,
            end_angle: end,
            color: ChartColor::hex("#1e8e3e"),
            label: "Accepted".to_string(),
            value: 3.0,
        }
    }

    #[test]
    fn quarter_wedge_is_a_path() {
        let svg = wedge(0.0, 90.0).render();
        assert!(svg.starts_with("<path"));
        assert!(svg.contains(" 0 0 1 "));
        assert!(svg.contains("<title>Accepted: 3</title>"));
    }

    #[test]
    fn large_wedge_sets_large_arc_flag() {
        let svg = wedge(0.0, 270.0).render();
        assert!(svg.contains(" 0 1 1 "));
    }

    #[test]
    fn full_wedge_is_a_circle() {
        let svg = wedge(0.0, 360.0).render();
        assert!(svg.starts_with("<circle"));
    }
}

mod label_tests {
    use super::*;

    #[test]
    fn label_renders_anchor_and_weight() {
        let svg = Label::new(1.0, 2.0, "Total")
            .with_anchor(TextAnchor::Middle)
            .bold()
            .render();
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(">Total</text>"));
    }
}

#[test]
fn marker_and_gridline_render() {
    let marker = Marker {
        cx: 1.0,
        cy: 2.0,
        radius: 6.0,
        color: ChartColor::hex("#3b82f6"),
        label: "1/5".to_string(),
        value: 4.0,
    };
    assert!(marker.render().contains(r#"r="6""#));

    let grid = GridLine {
        x1: 0.0,
        x2: 10.0,
        y: 5.0,
        color: ChartColor::hex("#e5e7eb"),
    };
    assert!(grid.render().contains(r#"y1="5" x2="10" y2="5""#));
}
