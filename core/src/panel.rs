//! What the results area below the controls shows.

use crate::response::Prediction;

/// Text of the neutral placeholder.
pub const PLACEHOLDER_TEXT: &str = "No results yet. Upload a file to start analysis.";

/// Exactly one of these is displayed at any time.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    /// A request is in flight.
    Loading,
    /// Last selection or request failed with this message.
    Error(String),
    /// Last request succeeded.
    Result {
        label: String,
        /// Already formatted, e.g. "87.34%"
        probability: String,
    },
    /// Nothing to show yet.
    Placeholder,
}

impl From<&Prediction> for Panel {
    fn from(prediction: &Prediction) -> Self {
        Panel::Result {
            label: prediction.label.clone(),
            probability: prediction.probability_percent(),
        }
    }
}
