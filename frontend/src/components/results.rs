//! Results area: loading indicator, error, prediction or placeholder.

use heartcare_core::{Panel, PLACEHOLDER_TEXT};
use leptos::*;

use crate::BrowserForm;

#[component]
pub fn ResultsPanel(form: RwSignal<BrowserForm>) -> impl IntoView {
    // Only re-render when what is displayed actually changes
    let panel = create_memo(move |_| form.with(|f| f.panel()));

    view! {
        <section class="results">
            <h3>"Results"</h3>
            {move || match panel.get() {
                Panel::Loading => view! {
                    <div class="loading">
                        <span class="spinner"></span>
                        "⏳ Analyzing ECG..."
                    </div>
                }.into_view(),
                Panel::Error(message) => view! {
                    <div class="error-message">{message}</div>
                }.into_view(),
                Panel::Result { label, probability } => view! {
                    <div class="result">
                        <p class="result-label">{label}</p>
                        <p class="result-probability">
                            "AFib probability: " <strong>{probability}</strong>
                        </p>
                    </div>
                }.into_view(),
                Panel::Placeholder => view! {
                    <p class="placeholder">{PLACEHOLDER_TEXT}</p>
                }.into_view(),
            }}
        </section>
    }
}
