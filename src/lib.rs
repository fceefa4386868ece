//! sliderpath - Slider paths with beat-aligned lengths
//!
//! Beatmap sliders are authored as a few control points and a curve kind,
//! but gameplay wants a dense polyline with a known length and cheap
//! progress queries. This library bridges the two: curve flattening,
//! duplicate-point segmentation, beat-grid length snapping, arc-length
//! interpolation, and the one-line textual format consumed downstream.

pub mod curves;
pub mod error;
pub mod io;
pub mod path;
pub mod primitives;
pub mod tolerance;

pub use error::ParseError;
pub use path::{CurveKind, ResolvedPath, SliderPath, SnapSettings};
pub use primitives::{Point2, Vec2};
