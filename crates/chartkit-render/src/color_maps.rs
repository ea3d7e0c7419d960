//! Colour lookup for scalar-coloured points.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::context::Rgb;

/// Converts HSV in `[0, 1]` to RGB in `[0, 1]`.
///
/// Hue is piecewise-linear over six sectors; saturation blends towards
/// white and value scales the result.
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Vec3 {
    const ONE_SIXTH: f64 = 1.0 / 6.0;
    const ONE_THIRD: f64 = 1.0 / 3.0;
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    const FIVE_SIXTHS: f64 = 5.0 / 6.0;

    let (r, g, b) = if hue > ONE_SIXTH && hue <= ONE_THIRD {
        ((ONE_THIRD - hue) / ONE_SIXTH, 1.0, 0.0)
    } else if hue > ONE_THIRD && hue <= 0.5 {
        (0.0, 1.0, (hue - ONE_THIRD) / ONE_SIXTH)
    } else if hue > 0.5 && hue <= TWO_THIRDS {
        (0.0, (TWO_THIRDS - hue) / ONE_SIXTH, 1.0)
    } else if hue > TWO_THIRDS && hue <= FIVE_SIXTHS {
        ((hue - TWO_THIRDS) / ONE_SIXTH, 0.0, 1.0)
    } else if hue > FIVE_SIXTHS && hue <= 1.0 {
        (1.0, 0.0, (1.0 - hue) / ONE_SIXTH)
    } else {
        (1.0, hue / ONE_SIXTH, 0.0)
    };

    let blend = |c: f64| ((saturation * c + (1.0 - saturation)) * value) as f32;
    Vec3::new(blend(r), blend(g), blend(b))
}

/// How linear colour components are quantized to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ramp {
    /// Cosine ease, darkening the ends of each channel.
    #[default]
    SCurve,
    /// Straight rounding.
    Linear,
    /// Square-root brightening.
    Sqrt,
}

impl Ramp {
    /// Quantizes one channel.
    #[allow(clippy::cast_sign_loss)]
    pub fn quantize(self, channel: f32) -> u8 {
        let c = f64::from(channel);
        let byte = match self {
            Ramp::SCurve => 127.5 * (1.0 + ((1.0 - c) * std::f64::consts::PI).cos()),
            Ramp::Linear => c * 255.0 + 0.5,
            Ramp::Sqrt => c.sqrt() * 255.0 + 0.5,
        };
        byte.clamp(0.0, 255.0) as u8
    }
}

/// A table of evenly spaced colours over a scalar range.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    range: (f64, f64),
    hue_range: (f64, f64),
    saturation_range: (f64, f64),
    value_range: (f64, f64),
    ramp: Ramp,
    nan_color: Rgb,
    table: Vec<Rgb>,
}

impl LookupTable {
    /// Number of entries in a default table.
    pub const DEFAULT_SIZE: usize = 256;

    /// Builds a red-to-blue rainbow over `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self::with_size(min, max, Self::DEFAULT_SIZE)
    }

    /// Builds a rainbow table with `size` entries (at least one).
    pub fn with_size(min: f64, max: f64, size: usize) -> Self {
        let mut table = Self {
            range: (min, max),
            hue_range: (0.0, 0.66667),
            saturation_range: (1.0, 1.0),
            value_range: (1.0, 1.0),
            ramp: Ramp::SCurve,
            nan_color: [128, 0, 0],
            table: Vec::new(),
        };
        table.build(size.max(1));
        table
    }

    /// Changes the ramp and rebuilds the table.
    #[must_use]
    pub fn with_ramp(mut self, ramp: Ramp) -> Self {
        self.ramp = ramp;
        self.build(self.table.len());
        self
    }

    /// Changes the hue range and rebuilds the table.
    #[must_use]
    pub fn with_hue_range(mut self, start: f64, end: f64) -> Self {
        self.hue_range = (start, end);
        self.build(self.table.len());
        self
    }

    #[allow(clippy::cast_precision_loss)]
    fn build(&mut self, size: usize) {
        let lerp = |(a, b): (f64, f64), t: f64| a + (b - a) * t;
        let steps = size.saturating_sub(1).max(1) as f64;
        let ramp = self.ramp;
        self.table = (0..size)
            .map(|i| {
                let t = i as f64 / steps;
                let rgb = hsv_to_rgb(
                    lerp(self.hue_range, t),
                    lerp(self.saturation_range, t),
                    lerp(self.value_range, t),
                );
                [ramp.quantize(rgb.x), ramp.quantize(rgb.y), ramp.quantize(rgb.z)]
            })
            .collect();
    }

    /// Scalar range covered by the table.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false; a table has at least one entry.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The entry at `index`, if any.
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.table.get(index).copied()
    }

    /// Table index for `value`, clamped to the table.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn index_of(&self, value: f64) -> usize {
        let (min, max) = self.range;
        let last = self.table.len() - 1;
        if max <= min {
            return 0;
        }
        let position = (value - min) * self.table.len() as f64 / (max - min);
        if position <= 0.0 {
            0
        } else {
            (position as usize).min(last)
        }
    }

    /// Maps a scalar to a colour. NaN maps to dark red.
    pub fn map_value(&self, value: f64) -> Rgb {
        if value.is_nan() {
            return self.nan_color;
        }
        self.table[self.index_of(value)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Vec3::new(1.0, 0.0, 0.0));
        assert!((hsv_to_rgb(1.0 / 3.0, 1.0, 1.0) - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
        assert!((hsv_to_rgb(2.0 / 3.0, 1.0, 1.0) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_hsv_saturation_and_value() {
        assert!((hsv_to_rgb(0.4, 0.0, 1.0) - Vec3::ONE).length() < 1e-6);
        assert!((hsv_to_rgb(0.0, 1.0, 0.5) - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_ramps() {
        assert_eq!(Ramp::SCurve.quantize(0.0), 0);
        assert_eq!(Ramp::SCurve.quantize(1.0), 255);
        assert_eq!(Ramp::SCurve.quantize(0.5), 127);
        assert_eq!(Ramp::Linear.quantize(0.5), 128);
        assert_eq!(Ramp::Sqrt.quantize(0.25), 128);
    }

    #[test]
    fn test_default_table_runs_red_to_blue() {
        let lut = LookupTable::new(0.0, 1.0);
        assert_eq!(lut.len(), 256);
        assert_eq!(lut.color(0), Some([255, 0, 0]));
        assert_eq!(lut.color(255), Some([0, 0, 255]));
        assert_eq!(lut.color(256), None);
    }

    #[test]
    fn test_map_value_clamps() {
        let lut = LookupTable::new(10.0, 20.0);
        assert_eq!(lut.index_of(10.0), 0);
        assert_eq!(lut.index_of(20.0), 255);
        assert_eq!(lut.index_of(-100.0), 0);
        assert_eq!(lut.index_of(1e9), 255);
        assert_eq!(lut.index_of(15.0), 128);
        assert_eq!(lut.map_value(-5.0), [255, 0, 0]);
    }

    #[test]
    fn test_degenerate_range() {
        let lut = LookupTable::new(3.0, 3.0);
        assert_eq!(lut.index_of(3.0), 0);
        assert_eq!(lut.index_of(99.0), 0);
    }

    #[test]
    fn test_nan() {
        let lut = LookupTable::new(0.0, 1.0);
        assert_eq!(lut.map_value(f64::NAN), [128, 0, 0]);
    }

    #[test]
    fn test_linear_ramp_rebuilds() {
        let lut = LookupTable::with_size(0.0, 1.0, 3).with_ramp(Ramp::Linear);
        assert_eq!(lut.len(), 3);
        assert_eq!(lut.color(0), Some([255, 0, 0]));
    }
}
