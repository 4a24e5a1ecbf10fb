//! HTTP upload of the ECG file to the prediction service.
//!
//! Status and body handling is `interpret_response`, tested in
//! `heartcare_core::response`; the `BrowserFile` mapping is tested in
//! [`crate::types`]. The same request flow against a live mock service is
//! exercised natively in `heartcare-cli`'s `tests/predict_service.rs`.

use gloo_net::http::Request;
use heartcare_core::{interpret_response, AnalysisError, Prediction, Predictor, UPLOAD_FIELD_NAME};
use web_sys::FormData;

use crate::types::BrowserFile;

/// `fetch`-backed predictor used by the upload page.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooPredictor;

impl Predictor<BrowserFile> for GlooPredictor {
    async fn predict(&self, url: &str, file: &BrowserFile) -> Result<Prediction, AnalysisError> {
        let file = file.inner();

        let form_data = FormData::new()
            .map_err(|e| AnalysisError::transport(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob_and_filename(UPLOAD_FIELD_NAME, file, &file.name())
            .map_err(|e| AnalysisError::transport(format!("Failed to append file: {:?}", e)))?;

        let request = Request::post(url)
            .body(form_data)
            .map_err(|e| AnalysisError::transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AnalysisError::transport(format!("HTTP request failed: {}", e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::transport(format!("Failed to read response: {}", e)))?;

        interpret_response(response.status(), &response.status_text(), &body)
    }
}
