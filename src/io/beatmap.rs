//! The single-line textual slider format.
//!
//! A slider serializes to one line of the form
//!
//! ```text
//! slider: {x},{y} [...] {T}|{cp1}|{cp2}|...,1,{length}
//! ```
//!
//! where `{x},{y}` is the first control point rounded to integers, `{T}` is
//! the curve kind letter, each `{cpN}` is a rounded `x:y` pair for a control
//! point after the first, `1` is the repeat count, and `{length}` is the
//! resolved arc length. The literal ` [...] ` stands in for hit-object
//! fields outside this crate's scope. Consuming tools match this token
//! layout exactly, so the shape is load-bearing down to the separators.

use crate::error::ParseError;
use crate::path::SliderPath;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Rounds to the nearest integer, ties to even.
///
/// Matches the rounding the reference platform applies to serialized
/// coordinates (2.5 rounds to 2, 3.5 rounds to 4).
fn round_half_even<F: Float>(v: F) -> i64 {
    let half = F::from(0.5).unwrap();
    let rounded = if v.fract().abs() == half {
        let two = F::from(2.0).unwrap();
        (v / two).round() * two
    } else {
        v.round()
    };
    rounded.to_i64().unwrap_or(0)
}

/// Serializes a slider path to its one-line textual form.
///
/// The length field is the resolved length, so it reflects beat snapping or
/// the expected length rather than the raw polyline length.
///
/// # Example
///
/// ```
/// use sliderpath::io::format_slider_line;
/// use sliderpath::{CurveKind, Point2, SliderPath};
///
/// let path: SliderPath<f64> = SliderPath::new(
///     vec![
///         Point2::new(0.0, 0.0),
///         Point2::new(50.0, 50.0),
///         Point2::new(100.0, 0.0),
///     ],
///     CurveKind::PerfectCurve,
/// );
/// assert_eq!(format_slider_line(&path), "slider: 0,0 [...] P|50:50|100:0,1,140");
/// ```
pub fn format_slider_line<F: Float + fmt::Display>(path: &SliderPath<F>) -> String {
    let anchor = path
        .control_points
        .first()
        .copied()
        .unwrap_or_else(Point2::origin);

    let mut tail = String::new();
    for (i, p) in path.control_points.iter().enumerate().skip(1) {
        if i > 1 {
            tail.push('|');
        }
        tail.push_str(&format!(
            "{}:{}",
            round_half_even(p.x),
            round_half_even(p.y)
        ));
    }

    format!(
        "slider: {},{} [...] {}|{},1,{}",
        round_half_even(anchor.x),
        round_half_even(anchor.y),
        path.kind.letter(),
        tail,
        path.resolve().length(),
    )
}

/// Parses a serialized slider line back into a [`SliderPath`].
///
/// The parsed length becomes the path's expected length, so the result
/// resolves to the same length the line carries and re-serializes to the
/// same text. Snap settings are not part of the line and come back as
/// defaults.
pub fn parse_slider_line<F: Float + FromStr>(line: &str) -> Result<SliderPath<F>, ParseError> {
    let rest = line.strip_prefix("slider: ").ok_or(ParseError::MissingPrefix)?;
    let (position, rest) = rest
        .split_once(" [...] ")
        .ok_or(ParseError::MissingSeparator)?;

    let (x, y) = position
        .split_once(',')
        .ok_or(ParseError::MissingField { name: "position" })?;
    let mut control_points = vec![Point2::new(parse_number(x)?, parse_number(y)?)];

    let (curve_data, rest) = rest
        .split_once(',')
        .ok_or(ParseError::MissingField { name: "repeat" })?;
    let (_repeat, length) = rest
        .split_once(',')
        .ok_or(ParseError::MissingField { name: "length" })?;

    let mut chunks = curve_data.split('|');
    // `split` always yields a first chunk, so the kind letter is present
    // even on empty curve data.
    let kind = chunks.next().unwrap_or("").parse()?;
    for chunk in chunks {
        // A path with a single control point serializes an empty tail.
        if chunk.is_empty() {
            continue;
        }
        let (x, y) = chunk
            .split_once(':')
            .ok_or(ParseError::MissingField { name: "control point" })?;
        control_points.push(Point2::new(parse_number(x)?, parse_number(y)?));
    }

    let mut path = SliderPath::new(control_points, kind);
    path.expected_length = Some(parse_number(length)?);
    Ok(path)
}

fn parse_number<F: FromStr>(s: &str) -> Result<F, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CurveKind;

    #[test]
    fn test_format_rounds_ties_to_even() {
        let path: SliderPath<f64> = SliderPath::with_expected_length(
            vec![
                Point2::new(0.5, 1.5),
                Point2::new(2.5, -2.5),
                Point2::new(3.49, -3.5),
            ],
            CurveKind::Linear,
            10.0,
        );

        assert_eq!(format_slider_line(&path), "slider: 0,2 [...] L|2:-2|3:-4,1,10");
    }

    #[test]
    fn test_format_single_control_point() {
        let path: SliderPath<f64> = SliderPath::with_expected_length(
            vec![Point2::new(5.0, 5.0)],
            CurveKind::Bezier,
            0.0,
        );

        assert_eq!(format_slider_line(&path), "slider: 5,5 [...] B|,1,0");
    }

    #[test]
    fn test_parse_line() {
        let path: SliderPath<f64> =
            parse_slider_line("slider: 0,0 [...] P|50:50|100:0,1,140").unwrap();

        assert_eq!(
            path.control_points,
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(50.0, 50.0),
                Point2::new(100.0, 0.0),
            ]
        );
        assert_eq!(path.kind, CurveKind::PerfectCurve);
        assert_eq!(path.expected_length, Some(140.0));
    }

    #[test]
    fn test_parse_single_point_line() {
        let path: SliderPath<f64> = parse_slider_line("slider: 5,5 [...] B|,1,0").unwrap();
        assert_eq!(path.control_points, vec![Point2::new(5.0, 5.0)]);
        assert_eq!(path.kind, CurveKind::Bezier);
        assert_eq!(path.expected_length, Some(0.0));
    }

    #[test]
    fn test_round_trip() {
        let line = "slider: 0,0 [...] P|50:50|100:0,1,140";
        let path: SliderPath<f64> = parse_slider_line(line).unwrap();
        assert_eq!(format_slider_line(&path), line);
    }

    #[test]
    fn test_parse_errors() {
        let missing_prefix = parse_slider_line::<f64>("0,0 [...] L|10:0,1,5");
        assert_eq!(missing_prefix.unwrap_err(), ParseError::MissingPrefix);

        let missing_separator = parse_slider_line::<f64>("slider: 0,0 L|10:0,1,5");
        assert_eq!(missing_separator.unwrap_err(), ParseError::MissingSeparator);

        let bad_position = parse_slider_line::<f64>("slider: 00 [...] L|10:0,1,5");
        assert_eq!(
            bad_position.unwrap_err(),
            ParseError::MissingField { name: "position" }
        );

        let bad_number = parse_slider_line::<f64>("slider: a,0 [...] L|10:0,1,5");
        assert_eq!(
            bad_number.unwrap_err(),
            ParseError::InvalidNumber("a".to_string())
        );

        let unknown_kind = parse_slider_line::<f64>("slider: 0,0 [...] X|10:0,1,5");
        assert_eq!(
            unknown_kind.unwrap_err(),
            ParseError::UnknownCurveKind("X".to_string())
        );

        let missing_repeat = parse_slider_line::<f64>("slider: 0,0 [...] L|10:0");
        assert_eq!(
            missing_repeat.unwrap_err(),
            ParseError::MissingField { name: "repeat" }
        );

        let missing_length = parse_slider_line::<f64>("slider: 0,0 [...] L|10:0,1");
        assert_eq!(
            missing_length.unwrap_err(),
            ParseError::MissingField { name: "length" }
        );

        let bad_pair = parse_slider_line::<f64>("slider: 0,0 [...] L|10;0,1,5");
        assert_eq!(
            bad_pair.unwrap_err(),
            ParseError::MissingField { name: "control point" }
        );
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(round_half_even(0.5_f64), 0);
        assert_eq!(round_half_even(1.5_f64), 2);
        assert_eq!(round_half_even(2.5_f64), 2);
        assert_eq!(round_half_even(3.5_f64), 4);
        assert_eq!(round_half_even(-2.5_f64), -2);
        assert_eq!(round_half_even(-3.5_f64), -4);
        assert_eq!(round_half_even(2.4_f64), 2);
        assert_eq!(round_half_even(2.6_f64), 3);
        assert_eq!(round_half_even(256.0_f32), 256);
    }
}
