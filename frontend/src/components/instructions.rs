//! Expected CSV layout and sample download.

use heartcare_core::instructions;
use leptos::*;

use crate::SAMPLE_CSV_PATH;

#[component]
pub fn Instructions() -> impl IntoView {
    view! {
        <section class="instructions">
            <h3>"Instructions for CSV format"</h3>
            <p>{instructions()}</p>
            <a class="button-secondary" href=SAMPLE_CSV_PATH download="sample_ecg.csv">
                "Download sample CSV"
            </a>
        </section>
    }
}
