//! Renders example slider paths to an SVG image.
//!
//! Run with: cargo run --example visualize

use sliderpath::path::polyline_length;
use sliderpath::{CurveKind, Point2, SliderPath};

use std::fs::File;
use std::io::Write;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;

fn main() {
    let mut svg = Svg::new(WIDTH, HEIGHT);

    // Panel dividers
    svg.line(400.0, 0.0, 400.0, 400.0, "#3a3a5a", 1.0);
    svg.line(0.0, 200.0, 800.0, 200.0, "#3a3a5a", 1.0);

    let linear = SliderPath::new(
        vec![
            Point2::new(30.0, 150.0),
            Point2::new(120.0, 60.0),
            Point2::new(210.0, 150.0),
            Point2::new(300.0, 60.0),
        ],
        CurveKind::Linear,
    );
    svg.group_start("translate(0, 0)");
    draw_slider(&mut svg, "Linear (L)", "#00d4ff", &linear);
    svg.group_end();

    let perfect = SliderPath::new(
        vec![
            Point2::new(40.0, 160.0),
            Point2::new(190.0, 40.0),
            Point2::new(340.0, 160.0),
        ],
        CurveKind::PerfectCurve,
    );
    svg.group_start("translate(400, 0)");
    draw_slider(&mut svg, "Perfect curve (P)", "#6bcb77", &perfect);
    svg.group_end();

    // The doubled control point pins a sharp corner into the curve.
    let corner = Point2::new(120.0, 40.0);
    let bezier = SliderPath::new(
        vec![
            Point2::new(30.0, 170.0),
            corner,
            corner,
            Point2::new(210.0, 170.0),
            Point2::new(300.0, 40.0),
        ],
        CurveKind::Bezier,
    );
    svg.group_start("translate(0, 200)");
    draw_slider(&mut svg, "Bézier with corner (B)", "#ffd93d", &bezier);
    svg.group_end();

    let catmull = SliderPath::new(
        vec![
            Point2::new(30.0, 160.0),
            Point2::new(110.0, 60.0),
            Point2::new(190.0, 160.0),
            Point2::new(270.0, 60.0),
            Point2::new(340.0, 160.0),
        ],
        CurveKind::Catmull,
    );
    svg.group_start("translate(400, 200)");
    draw_slider(&mut svg, "Catmull-Rom (C)", "#ff6b6b", &catmull);
    svg.group_end();

    svg.save("slider_paths.svg");
    println!("Generated slider_paths.svg");
}

/// Draws one slider into the current 400x200 panel: control polygon and
/// points, the untrimmed approximation (faded), the beat-snapped playable
/// path (colored), and progress markers at 1/4, 1/2, 3/4.
fn draw_slider(svg: &mut Svg, title: &str, color: &str, path: &SliderPath<f64>) {
    svg.text(20.0, 26.0, title, 14.0, "#e0e0e0");

    for pair in path.control_points.windows(2) {
        svg.line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, "#4a4a6a", 1.0);
    }

    let raw = path.raw_polyline();
    svg.polyline(&raw, "#4a4a6a", 1.5, "none");
    svg.polyline(&path.path(), color, 3.0, "none");

    for t in [0.25, 0.5, 0.75] {
        let p = path.position_at(t);
        svg.circle(p.x, p.y, 3.5, "#ffffff", "none", 0.0);
    }

    for p in &path.control_points {
        svg.circle(p.x, p.y, 5.0, "#ffd93d", "#ffffff", 1.5);
    }

    svg.text(
        20.0,
        190.0,
        &format!(
            "raw {:.1} / snapped {:.1}",
            polyline_length(&raw),
            path.length()
        ),
        11.0,
        "#808080",
    );
}

/// SVG helper to create an SVG document
struct Svg {
    content: String,
    width: f64,
    height: f64,
}

impl Svg {
    fn new(width: f64, height: f64) -> Self {
        Self {
            content: String::new(),
            width,
            height,
        }
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
            cx, cy, r, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.content.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn polyline(&mut self, points: &[Point2<f64>], stroke: &str, stroke_width: f64, fill: &str) {
        let pts: String = points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.content.push_str(&format!(
            r#"<polyline points="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"/>"#,
            pts, fill, stroke, stroke_width
        ));
        self.content.push('\n');
    }

    fn text(&mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str) {
        self.content.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="system-ui, sans-serif" font-size="{}" fill="{}">{}</text>"#,
            x, y, font_size, fill, text
        ));
        self.content.push('\n');
    }

    fn group_start(&mut self, transform: &str) {
        self.content
            .push_str(&format!(r#"<g transform="{}">"#, transform));
        self.content.push('\n');
    }

    fn group_end(&mut self) {
        self.content.push_str("</g>\n");
    }

    fn save(&self, path: &str) {
        let svg = format!(
            r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">
<rect width="100%" height="100%" fill="#1a1a2e"/>
{}
</svg>"##,
            self.width, self.height, self.width, self.height, self.content
        );
        let mut file = File::create(path).unwrap();
        file.write_all(svg.as_bytes()).unwrap();
    }
}
