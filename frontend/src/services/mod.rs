//! External services.
//!
//! # Services
//!
//! - [`upload`] - ECG file upload to the prediction service
//!
//! The request/response contract itself lives in `heartcare_core::response`.

pub mod upload;

pub use upload::*;
