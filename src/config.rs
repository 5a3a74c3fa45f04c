use eframe::egui;

/// Where the EPICA Dome C 800 kyr temperature estimates are published.
pub const EPICA_URL: &str =
    "https://www.key2stats.com/EPICA_Dome_C_Ice_Core_800KYr_Temperature_Estimates_229_35.csv";

// ---------------------------------------------------------------------------
// Fixed run settings
// ---------------------------------------------------------------------------

/// Everything the run needs to know up front. Not user-configurable.
#[derive(Debug, Clone)]
pub struct StripesConfig {
    pub source: String,
    pub age_column: String,
    pub value_column: String,
    pub title: String,
    pub colormap: String,
    /// Initial window size in points (wide and short, like a 12×1 figure).
    pub window_size: [f32; 2],
}

impl Default for StripesConfig {
    fn default() -> Self {
        Self {
            source: EPICA_URL.to_string(),
            age_column: "Age".to_string(),
            value_column: "dT".to_string(),
            title: "EPICA Dome C Temperature Anomalies (–800 kyr to present)".to_string(),
            colormap: "RdBu_r".to_string(),
            window_size: [1200.0, 160.0],
        }
    }
}

impl StripesConfig {
    pub fn columns(&self) -> [&str; 2] {
        [self.age_column.as_str(), self.value_column.as_str()]
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(self.window_size)
                .with_min_inner_size([400.0, 80.0]),
            ..Default::default()
        }
    }
}
