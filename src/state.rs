use crate::color::{ColorRange, DivergingColormap};
use crate::data::model::{Dataset, Grid};
use crate::error::StripesError;

// ---------------------------------------------------------------------------
// Render state
// ---------------------------------------------------------------------------

/// Everything the strip needs, computed once before the window opens.
pub struct StripesState {
    /// Anomaly values, one row, oldest sample first.
    pub grid: Grid,

    /// Symmetric bounds for the colour scale.
    pub range: ColorRange,

    pub colormap: DivergingColormap,

    /// Heading drawn above the strip.
    pub title: String,
}

impl StripesState {
    /// Normalize and reshape a cleaned dataset.
    pub fn prepare(
        dataset: &Dataset,
        colormap: DivergingColormap,
        title: &str,
    ) -> Result<Self, StripesError> {
        let range = ColorRange::symmetric(dataset)?;
        log::info!(
            "color range [{:.3}, {:.3}] using {}",
            range.low,
            range.high,
            colormap.name
        );

        let grid = Grid::single_row(dataset)?;
        log::debug!("grid shape {:?}", grid.shape());

        Ok(Self {
            grid,
            range,
            colormap,
            title: title.to_string(),
        })
    }

    /// Cell colours for the strip, left to right.
    pub fn cell_colors(&self) -> Vec<eframe::egui::Color32> {
        self.grid
            .row(0)
            .iter()
            .map(|&v| self.colormap.color_for(v, &self.range))
            .collect()
    }
}
