//! Output of `heartcare analyze`.

use heartcare_core::Prediction;
use serde::Serialize;

/// One analysed file, as printed with `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub file: String,
    pub prediction_label: String,
    pub probability_afib: f64,
    /// Same text the web page shows, e.g. "87.34%"
    pub probability_percent: String,
}

impl AnalysisReport {
    pub fn new(file: impl Into<String>, prediction: &Prediction) -> Self {
        Self {
            file: file.into(),
            prediction_label: prediction.label.clone(),
            probability_afib: prediction.probability_afib,
            probability_percent: prediction.probability_percent(),
        }
    }

    /// Human-readable summary line.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} (AFib probability {})",
            self.file, self.prediction_label, self.probability_percent
        )
    }
}
