use eframe::egui::Color32;
use palette::{Mix, Srgb};

use crate::data::model::Dataset;
use crate::error::StripesError;

// ---------------------------------------------------------------------------
// Symmetric color range
// ---------------------------------------------------------------------------

/// `[low, high]` with `low == -high`, centred on zero anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub low: f64,
    pub high: f64,
}

impl ColorRange {
    /// `(-v, v)` where `v` is the largest absolute value in the dataset.
    pub fn symmetric(dataset: &Dataset) -> Result<Self, StripesError> {
        let v = dataset
            .values()
            .map(f64::abs)
            .reduce(f64::max)
            .ok_or(StripesError::EmptyDataset)?;
        Ok(ColorRange { low: -v, high: v })
    }

    /// Position of `value` inside the range, clamped to `[0, 1]`.
    /// A zero-width range puts everything at the midpoint.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.high - self.low;
        if span == 0.0 {
            return 0.5;
        }
        ((value - self.low) / span).clamp(0.0, 1.0)
    }
}

// ---------------------------------------------------------------------------
// Diverging colormap
// ---------------------------------------------------------------------------

/// ColorBrewer RdBu, 11 classes, red end first.
const RDBU: [(u8, u8, u8); 11] = [
    (103, 0, 31),
    (178, 24, 43),
    (214, 96, 77),
    (244, 165, 130),
    (253, 219, 199),
    (247, 247, 247),
    (209, 229, 240),
    (146, 197, 222),
    (67, 147, 195),
    (33, 102, 172),
    (5, 48, 97),
];

/// Piecewise-linear colormap through evenly spaced control colours.
/// Channels are blended in sRGB, not linear light.
#[derive(Debug, Clone)]
pub struct DivergingColormap {
    pub name: String,
    stops: Vec<Srgb<f32>>,
}

impl DivergingColormap {
    /// Look up a colormap by its matplotlib-style name.
    pub fn by_name(name: &str) -> Option<Self> {
        let mut stops: Vec<Srgb<f32>> = RDBU
            .iter()
            .map(|&(r, g, b)| Srgb::new(r, g, b).into_format::<f32>())
            .collect();
        match name {
            "RdBu" => {}
            "RdBu_r" => stops.reverse(),
            _ => return None,
        }
        Some(DivergingColormap {
            name: name.to_string(),
            stops,
        })
    }

    /// Colour at position `t` in `[0, 1]` (clamped).
    pub fn sample(&self, t: f64) -> Color32 {
        let last = self.stops.len() - 1;
        let scaled = t.clamp(0.0, 1.0) as f32 * last as f32;
        let i = (scaled.floor() as usize).min(last.saturating_sub(1));
        let frac = scaled - i as f32;
        let mixed = self.stops[i].mix(self.stops[(i + 1).min(last)], frac);

        let rgb: Srgb<u8> = mixed.into_format();
        Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
    }

    /// Colour for a data value bounded by `range`.
    pub fn color_for(&self, value: f64, range: &ColorRange) -> Color32 {
        self.sample(range.normalize(value))
    }
}
