//! Prediction service contract.
//!
//! | Method | Path              | Body                                   |
//! |--------|-------------------|----------------------------------------|
//! | POST   | `{base}/predict`  | multipart, one part named `ecg_file`   |
//!
//! Success bodies carry `prediction_label` and `probability_afib`; error
//! bodies may carry an `error` string.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Multipart field name the service reads the uploaded file from.
pub const UPLOAD_FIELD_NAME: &str = "ecg_file";

/// Path appended to the configured base URL.
pub const PREDICT_PATH: &str = "/predict";

/// Successful answer from the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Classification label, e.g. "AFib Detected"
    #[serde(rename = "prediction_label")]
    pub label: String,
    /// Probability of the positive class, kept exactly as received
    pub probability_afib: f64,
}

impl Prediction {
    /// Probability as a percentage with two decimals, e.g. `87.34%`.
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability_afib * 100.0)
    }
}

/// Error body returned with non-success statuses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Full URL of the predict endpoint for a base URL.
pub fn predict_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), PREDICT_PATH)
}

/// Turn a raw HTTP answer into a prediction or a typed failure.
///
/// Both platform transports feed their response through here so that the
/// error message precedence is the same everywhere: the body's `error`
/// field, then the status reason, then a generic HTTP error text.
pub fn interpret_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<Prediction, AnalysisError> {
    if !(200..300).contains(&status) {
        let server_error = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty());

        let message = match server_error {
            Some(error) => error,
            None if !status_text.trim().is_empty() => status_text.trim().to_string(),
            None => format!("HTTP error! status: {}", status),
        };

        log::warn!("Prediction service answered {}: {}", status, message);
        return Err(AnalysisError::Server { status, message });
    }

    serde_json::from_str::<Prediction>(body).map_err(|e| AnalysisError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let body = r#"{"prediction_label": "AFib Detected", "probability_afib": 0.8734}"#;
        let prediction = interpret_response(200, "OK", body).unwrap();

        assert_eq!(prediction.label, "AFib Detected");
        assert_eq!(prediction.probability_afib, 0.8734);
        assert_eq!(prediction.probability_percent(), "87.34%");
    }

    #[test]
    fn test_extra_fields_ignored() {
        let body = r#"{"prediction_label": "Normal", "probability_afib": 0.02, "model": "v3"}"#;
        let prediction = interpret_response(200, "OK", body).unwrap();
        assert_eq!(prediction.probability_percent(), "2.00%");
    }

    #[test]
    fn test_probability_not_clamped() {
        let body = r#"{"prediction_label": "Odd", "probability_afib": 1.5}"#;
        let prediction = interpret_response(200, "OK", body).unwrap();
        assert_eq!(prediction.probability_afib, 1.5);
        assert_eq!(prediction.probability_percent(), "150.00%");
    }

    #[test]
    fn test_server_error_field_preferred() {
        let err = interpret_response(400, "Bad Request", r#"{"error": "file too short"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "file too short");
        assert_eq!(
            err,
            AnalysisError::Server {
                status: 400,
                message: "file too short".into()
            }
        );
    }

    #[test]
    fn test_status_text_when_no_error_field() {
        let err = interpret_response(502, "Bad Gateway", "<html>oops</html>").unwrap_err();
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = interpret_response(500, "Internal Server Error", r#"{"error": ""}"#).unwrap_err();
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_generic_http_error() {
        let err = interpret_response(503, "", "").unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn test_unparseable_success_body() {
        let err = interpret_response(200, "OK", "not json").unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse response"));

        let err = interpret_response(200, "OK", r#"{"prediction_label": "Normal"}"#).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(_)));
    }

    #[test]
    fn test_predict_url() {
        assert_eq!(predict_url("http://localhost:5000"), "http://localhost:5000/predict");
        assert_eq!(predict_url("http://localhost:5000/"), "http://localhost:5000/predict");
        assert_eq!(predict_url("https://api.example.com/v1/"), "https://api.example.com/v1/predict");
    }
}
