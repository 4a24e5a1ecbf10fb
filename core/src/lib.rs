//! # HeartCare core - ECG upload form logic
//!
//! Platform-independent part of the HeartCare upload page: file type check,
//! the upload form state machine and the prediction service contract. The
//! browser app and the native CLI both drive [`UploadForm`] and only differ
//! in the [`Predictor`] they plug in.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CSV File   │────▶│ UploadForm  │────▶│  Predictor  │────▶│ /predict    │
//! │ (name/type) │     │ (validate)  │     │ (gloo/reqw) │     │ (remote)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use heartcare_core::UploadForm;
//!
//! let mut form = UploadForm::new(Some("http://localhost:5000".into()));
//! form.select_file(Some(file));
//! form.start_analysis(&predictor).await;
//! println!("{:?}", form.panel());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Analysis error taxonomy
//! - [`validation`] - Client-side CSV check
//! - [`form`] - Upload form state machine
//! - [`response`] - Predict endpoint contract
//! - [`predictor`] - Transport trait
//! - [`panel`] - Results area model
//! - [`format`] - Expected CSV layout

pub mod error;
pub mod validation;

pub mod form;
pub mod panel;

pub mod predictor;
pub mod response;

pub mod format;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{AnalysisError, GENERIC_FAILURE_MESSAGE, INVALID_FILE_TYPE_MESSAGE};

pub use validation::{is_csv, CsvCandidate, CSV_EXTENSION, CSV_MEDIA_TYPE};

pub use form::{AnalysisTicket, FormState, UploadForm, NO_FILE_STATUS};

pub use panel::{Panel, PLACEHOLDER_TEXT};

pub use predictor::Predictor;

pub use response::{interpret_response, predict_url, Prediction, PREDICT_PATH, UPLOAD_FIELD_NAME};

pub use format::{header_row, instructions, EXPECTED_ROWS, LEADS, SAMPLING_RATE_HZ};
