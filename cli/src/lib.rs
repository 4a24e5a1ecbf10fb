//! # HeartCare CLI - native client for the ECG prediction service
//!
//! Drives the same [`heartcare_core::UploadForm`] as the web page, with a
//! reqwest transport instead of the browser's `fetch`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use heartcare_cli::{ClientConfig, HttpPredictor, LocalFile};
//! use heartcare_core::UploadForm;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::from_env();
//!     let mut form = UploadForm::new(config.api_url);
//!     form.select_file(Some(LocalFile::open("ecg.csv".as_ref()).await.unwrap()));
//!     form.start_analysis(&HttpPredictor::new()).await;
//!     println!("{:?}", form.panel());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - CLI error type
//! - [`config`] - Service URL from env / `.env` / flags
//! - [`file`] - Files read from disk
//! - [`client`] - reqwest multipart transport
//! - [`report`] - Command output

pub mod error;
pub mod config;

pub mod file;
pub mod client;

pub mod report;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CliError, CliResult};
pub use config::{ClientConfig, API_URL_VAR};
pub use file::{guess_media_type, LocalFile};
pub use client::HttpPredictor;
pub use report::AnalysisReport;
