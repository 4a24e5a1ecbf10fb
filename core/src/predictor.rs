//! Transport seam between the form and the prediction service.

use crate::error::AnalysisError;
use crate::response::Prediction;

/// Sends one file to the predict endpoint.
///
/// Implementations issue exactly one request per call and never retry.
/// The returned future is not required to be `Send`: the browser
/// implementation runs on the single UI thread.
#[allow(async_fn_in_trait)]
pub trait Predictor<F> {
    /// Upload `file` to `url` and interpret the answer.
    async fn predict(&self, url: &str, file: &F) -> Result<Prediction, AnalysisError>;
}
