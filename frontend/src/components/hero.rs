//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Detect atrial fibrillation with ECG data"</h1>
            <p class="subtitle">
                "Upload a 12-lead ECG CSV file and we'll analyze it for atrial fibrillation."
            </p>
        </div>
    }
}
