use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Fixed domain of the payload range control, independent of the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for PayloadControl {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10_000.0,
            step: 1_000.0,
        }
    }
}

impl PayloadControl {
    /// Tick positions shown under the sliders (`0 kg`, `1000 kg`, …).
    pub fn marks(&self) -> Vec<f64> {
        if self.step <= 0.0 || self.max < self.min {
            return vec![self.min];
        }
        let n = ((self.max - self.min) / self.step).floor() as usize;
        (0..=n).map(|i| self.min + i as f64 * self.step).collect()
    }
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Launch records CSV, relative to the working directory.
    pub data_path: PathBuf,
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub payload_control: PayloadControl,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            title: "SpaceX Launch Records Dashboard".to_string(),
            window_size: [1200.0, 900.0],
            min_window_size: [700.0, 500.0],
            payload_control: PayloadControl::default(),
        }
    }
}
