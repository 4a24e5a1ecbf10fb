//! HTTP client for the prediction service.
//!
//! Sends the file as a single multipart part and hands the raw answer to
//! [`interpret_response`], so error messages match the browser app.

use heartcare_core::{
    interpret_response, AnalysisError, CsvCandidate, Prediction, Predictor, UPLOAD_FIELD_NAME,
};
use reqwest::multipart::{Form, Part};

use crate::file::LocalFile;

/// reqwest-backed [`Predictor`].
///
/// No timeout and no retry: one call, one request.
#[derive(Debug, Clone, Default)]
pub struct HttpPredictor {
    client: reqwest::Client,
}

impl HttpPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    fn multipart(file: &LocalFile) -> Result<Form, AnalysisError> {
        let mut part = Part::bytes(file.bytes().to_vec()).file_name(file.file_name());
        let media_type = file.media_type();
        if !media_type.is_empty() {
            part = part
                .mime_str(&media_type)
                .map_err(|e| AnalysisError::transport(format!("Invalid media type: {}", e)))?;
        }

        Ok(Form::new().part(UPLOAD_FIELD_NAME, part))
    }
}

impl Predictor<LocalFile> for HttpPredictor {
    async fn predict(&self, url: &str, file: &LocalFile) -> Result<Prediction, AnalysisError> {
        let form = Self::multipart(file)?;

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AnalysisError::transport(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AnalysisError::transport(format!("Failed to read response: {}", e)))?;

        interpret_response(status.as_u16(), status.canonical_reason().unwrap_or(""), &body)
    }
}
