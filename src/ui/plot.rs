use eframe::egui::{Stroke, Ui, Vec2};
use egui_plot::{Plot, PlotPoints, Polygon};

use crate::state::StripesState;

// ---------------------------------------------------------------------------
// Stripes plot (central panel)
// ---------------------------------------------------------------------------

/// Unit-square cell `i` of the strip, as polygon corners.
fn cell_corners(i: usize) -> Vec<[f64; 2]> {
    let x0 = i as f64;
    let x1 = x0 + 1.0;
    vec![[x0, 0.0], [x1, 0.0], [x1, 1.0], [x0, 1.0]]
}

/// Render the strip: one filled cell per sample, no axes or decorations.
pub fn stripes_plot(ui: &mut Ui, state: &StripesState) {
    let (_, n_cols) = state.grid.shape();
    let colors = state.cell_colors();

    Plot::new("warming_stripes")
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .show_x(false)
        .show_y(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_double_click_reset(false)
        .set_margin_fraction(Vec2::ZERO)
        .include_x(0.0)
        .include_x(n_cols as f64)
        .include_y(0.0)
        .include_y(1.0)
        .show(ui, |plot_ui| {
            for (i, color) in colors.into_iter().enumerate() {
                let cell = Polygon::new(PlotPoints::from(cell_corners(i)))
                    .fill_color(color)
                    .stroke(Stroke::NONE);
                plot_ui.polygon(cell);
            }
        });
}
