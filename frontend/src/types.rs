//! Browser-side types.
//!
//! Form state, predictions and errors come from `heartcare_core`; this module
//! only adapts browser objects to it.

use heartcare_core::CsvCandidate;
use web_sys::File;

/// A `File` picked through the input or dropped on the upload zone.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserFile(pub File);

impl BrowserFile {
    pub fn inner(&self) -> &File {
        &self.0
    }
}

impl From<File> for BrowserFile {
    fn from(file: File) -> Self {
        BrowserFile(file)
    }
}

impl CsvCandidate for BrowserFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}

/// Upload form as held by the page.
pub type BrowserForm = heartcare_core::UploadForm<BrowserFile>;

/// A static navigation link in the header.
#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Header navigation, pointing at pages served elsewhere.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "How it works", href: "/how-it-works" },
    NavLink { label: "Pricing", href: "/pricing" },
    NavLink { label: "FAQs", href: "/faqs" },
];

// Browser objects only exist under wasm32; run with `wasm-pack test --headless --firefox`.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use heartcare_core::{FormState, UploadForm, INVALID_FILE_TYPE_MESSAGE};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::FilePropertyBag;

    wasm_bindgen_test_configure!(run_in_browser);

    fn file(name: &str, media_type: &str) -> BrowserFile {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str("I,II,III\n0.1,0.2,0.1\n"));
        let options = FilePropertyBag::new();
        options.set_type(media_type);
        File::new_with_str_sequence_and_options(&parts, name, &options)
            .map(BrowserFile::from)
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_name_and_type_come_from_the_file() {
        let f = file("patient.csv", "text/csv");
        assert_eq!(f.file_name(), "patient.csv");
        assert_eq!(f.media_type(), "text/csv");
        assert!(f.is_csv());
    }

    #[wasm_bindgen_test]
    fn test_uppercase_extension_without_type() {
        assert!(file("DATA.CSV", "").is_csv());
    }

    #[wasm_bindgen_test]
    fn test_text_file_rejected_by_form() {
        let mut form: BrowserForm = UploadForm::new(Some("http://predict.test".into()));
        form.select_file(Some(file("notes.txt", "text/plain")));

        assert!(matches!(form.state(), FormState::Failed { file: None, .. }));
        assert_eq!(form.error_message().as_deref(), Some(INVALID_FILE_TYPE_MESSAGE));
    }
}
