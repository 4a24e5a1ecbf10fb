//! HeartCare - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading a 12-lead ECG CSV file and showing the
//! atrial fibrillation prediction returned by the HeartCare service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (logo, navigation)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── Instructions (CSV layout, sample download)             │
//! │  ├── UploadSection (file input, drag & drop, start)         │
//! │  └── ResultsPanel (loading / error / result / placeholder)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Service URL and static paths
//! - [`types`] - Browser adapters (BrowserFile, NavLink)
//! - [`components`] - UI components
//! - [`services`] - Prediction service transport

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{BrowserFile, BrowserForm, NavLink, NAV_LINKS};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the app on `<body>`.
///
/// Exported to JavaScript so a host page can mount the app itself.
#[wasm_bindgen]
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    let config = AppConfig::from_build_env();
    match config.api_url.as_deref() {
        Some(url) => log::info!("🫀 HeartCare starting, prediction service: {}", url),
        None => log::warn!("🫀 HeartCare starting without HEARTCARE_API_URL"),
    }

    mount_to_body(move || view! { <App config=config/> });
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route
                        path="/"
                        view=move || view! { <MainContent config=config.clone()/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent(config: AppConfig) -> impl IntoView {
    // The whole page state: one form, shared by the upload and result areas
    let form = create_rw_signal(BrowserForm::new(config.api_url));

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <Instructions/>
            <UploadSection form=form/>
            <ResultsPanel form=form/>
        </div>
    }
}
