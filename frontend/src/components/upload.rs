//! CSV upload component with drag & drop support.
//!
//! Handles file selection and the "Start analysis" trigger. All state lives
//! in the shared [`BrowserForm`] signal; this component only feeds it events
//! and runs the request.

use heartcare_core::Predictor;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::services::GlooPredictor;
use crate::{BrowserFile, BrowserForm};

#[component]
pub fn UploadSection(form: RwSignal<BrowserForm>) -> impl IntoView {
    let (is_dragging, set_is_dragging) = create_signal(false);

    let select = move |file: Option<File>| {
        form.update(|f| f.select_file(file.map(BrowserFile::from)));
    };

    // File input change
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        select(input.files().and_then(|files| files.get(0)));
    };

    // Drop on the upload zone
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);

        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if file.is_some() {
            select(file);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_start = move |_| {
        // begin_analysis ignores the trigger while a request is in flight
        let Some(ticket) = form.try_update(|f| f.begin_analysis()).flatten() else {
            return;
        };

        spawn_local(async move {
            let outcome = GlooPredictor.predict(&ticket.url, &ticket.file).await;
            form.update(|f| {
                f.finish_analysis(ticket.request_id, outcome);
            });
        });
    };

    // The visible button opens the hidden file input
    let trigger_file_input = move |_| {
        if let Some(input) = document()
            .get_element_by_id("fileInput")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.click();
        }
    };

    view! {
        <section class="upload">
            <h3>"Upload your CSV file"</h3>
            <div
                class="upload-zone"
                id="uploadZone"
                class:dragging=move || is_dragging.get()
                on:dragover=on_drag_over
                on:dragleave=move |_| set_is_dragging.set(false)
                on:drop=on_drop
            >
                <input
                    type="file"
                    id="fileInput"
                    accept=".csv,text/csv"
                    style="display:none"
                    on:change=on_file_change
                />
                <button
                    class="upload-button"
                    prop:disabled=move || form.with(|f| f.is_loading())
                    on:click=trigger_file_input
                >
                    "📂 Choose file"
                </button>
                <span
                    class="upload-status"
                    class:rejected=move || form.with(|f| f.is_rejected())
                >
                    {move || form.with(|f| f.status_text())}
                </span>
                <p class="upload-hint">"or drag and drop the file here"</p>
            </div>
            <button
                class="button-primary start-analysis"
                prop:disabled=move || !form.with(|f| f.can_start())
                on:click=on_start
            >
                {move || if form.with(|f| f.is_loading()) {
                    "Analyzing..."
                } else {
                    "Start analysis"
                }}
            </button>
        </section>
    }
}
