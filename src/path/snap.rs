//! Beat-snap length quantization.

use num_traits::Float;

/// Timing-derived settings that decide how a raw path length is quantized
/// when no explicit length is given.
///
/// A slider traveling at the map's velocity covers
/// `100 · slider_multiplier · speed_multiplier` distance units per beat;
/// dividing by `beat_snap_divisor` gives the distance of one snap step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings<F> {
    /// Base velocity scale of the map.
    pub slider_multiplier: F,
    /// Velocity scale of the active timing section.
    pub speed_multiplier: F,
    /// Number of snap steps per beat.
    pub beat_snap_divisor: u32,
}

impl<F: Float> SnapSettings<F> {
    /// Creates snap settings from explicit values.
    #[inline]
    pub fn new(slider_multiplier: F, speed_multiplier: F, beat_snap_divisor: u32) -> Self {
        Self {
            slider_multiplier,
            speed_multiplier,
            beat_snap_divisor,
        }
    }

    /// Distance covered in one beat.
    #[inline]
    pub fn length_per_beat(&self) -> F {
        F::from(100.0).unwrap() * self.slider_multiplier * self.speed_multiplier
    }

    /// Distance covered in one snap step.
    #[inline]
    pub fn length_per_snap(&self) -> F {
        self.length_per_beat() / F::from(self.beat_snap_divisor).unwrap()
    }

    /// Snaps `raw_length` down to the snap grid.
    ///
    /// The result is `raw_length - (raw_length mod step)`; for non-negative
    /// lengths that is a floor onto multiples of the step. A step that is
    /// zero, negative, or non-finite (a zero divisor or multiplier) leaves
    /// the length unquantized.
    pub fn snap_length(&self, raw_length: F) -> F {
        let step = self.length_per_snap();
        if !step.is_finite() || step <= F::zero() {
            return raw_length;
        }
        raw_length - raw_length % step
    }
}

impl<F: Float> Default for SnapSettings<F> {
    /// Slider multiplier 1.4, speed multiplier 1.0, divisor 4.
    fn default() -> Self {
        Self {
            slider_multiplier: F::from(1.4).unwrap(),
            speed_multiplier: F::one(),
            beat_snap_divisor: 4,
        }
    }
}
