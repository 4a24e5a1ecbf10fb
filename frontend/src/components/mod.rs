//! UI Components for the HeartCare upload page.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Logo, navigation and account buttons
//! - [`Hero`] - Main title and description
//! - [`Instructions`] - Expected CSV layout and sample download
//!
//! # Feature Components
//! - [`UploadSection`] - CSV file selection with drag & drop, analysis trigger
//! - [`ResultsPanel`] - Loading indicator, error, or prediction

mod header;
mod hero;
mod instructions;
mod upload;
mod results;

pub use header::*;
pub use hero::*;
pub use instructions::*;
pub use upload::*;
pub use results::*;
