//! Upload form state machine.
//!
//! ```text
//!            select(valid)             begin_analysis
//!   Idle ─────────────────▶ FileSelected ─────────────▶ Loading
//!    ▲                         ▲   ▲                     │    │
//!    │ select(None)            │   │ select(valid)  ok   │    │ err
//!    │                         │   └──────────── Success ◀┘    │
//!    └─────────────────────────┴──────────────── Failed  ◀─────┘
//! ```
//!
//! Every state carries only its own data, so combinations such as "loading
//! and failed" cannot be represented. Requests are tagged with an id; a
//! response is applied only while its request is still the one in flight.

use crate::error::AnalysisError;
use crate::panel::Panel;
use crate::predictor::Predictor;
use crate::response::{predict_url, Prediction};
use crate::validation::CsvCandidate;

/// Status text shown when no file is selected.
pub const NO_FILE_STATUS: &str = "No file selected";

/// Current state of the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<F> {
    /// Nothing selected yet, or the selection was cleared.
    Idle,
    /// A valid file is selected and no request was made for it yet.
    FileSelected { file: F },
    /// A request for `file` is in flight.
    Loading { file: F, request_id: u64 },
    /// The last request succeeded.
    Success { file: F, prediction: Prediction },
    /// The last selection or request failed.
    Failed {
        /// Still-selected file, if any
        file: Option<F>,
        error: AnalysisError,
        /// Name of the file that failed validation
        rejected: Option<String>,
    },
}

/// Everything a transport needs to run one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisTicket<F> {
    /// Identifies the request when handing the outcome back
    pub request_id: u64,
    /// Full predict endpoint URL
    pub url: String,
    pub file: F,
}

/// Upload form: selected file, in-flight request and last outcome.
///
/// The endpoint is injected at construction; its absence is reported when
/// analysis is triggered, never at construction time.
#[derive(Debug, Clone)]
pub struct UploadForm<F> {
    endpoint: Option<String>,
    state: FormState<F>,
    last_request_id: u64,
}

impl<F> UploadForm<F>
where
    F: CsvCandidate + Clone,
{
    /// Create an idle form for the given prediction service base URL.
    pub fn new(endpoint: Option<String>) -> Self {
        let endpoint = endpoint
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        Self {
            endpoint,
            state: FormState::Idle,
            last_request_id: 0,
        }
    }

    /// Configured base URL, if any.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn state(&self) -> &FormState<F> {
        &self.state
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Handle a file selection (`None` when the selection was cleared).
    ///
    /// Rejections are reported through the state, never as an `Err`. A
    /// selection made while a request is in flight supersedes that request.
    pub fn select_file(&mut self, file: Option<F>) {
        if let FormState::Loading { request_id, .. } = &self.state {
            log::info!("Selection changed, request #{} superseded", request_id);
        }

        self.state = match file {
            None => {
                log::debug!("File selection cleared");
                FormState::Idle
            }
            Some(file) if file.is_csv() => {
                log::info!("📄 Selected {}", file.file_name());
                FormState::FileSelected { file }
            }
            Some(file) => {
                let name = file.file_name();
                log::warn!(
                    "Rejected {} (declared type: {:?})",
                    name,
                    file.media_type()
                );
                FormState::Failed {
                    file: None,
                    error: AnalysisError::InvalidFileType,
                    rejected: Some(name),
                }
            }
        };
    }

    /// Synchronous half of starting an analysis.
    ///
    /// Returns the ticket to hand to a [`Predictor`], or `None` when nothing
    /// should be sent: a request is already in flight (the trigger is
    /// ignored), no endpoint is configured, or no file is selected. The last
    /// two leave the form in `Failed` without ever entering `Loading`.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket<F>> {
        if let FormState::Loading { request_id, .. } = &self.state {
            log::warn!("Analysis already running (request #{}), trigger ignored", request_id);
            return None;
        }

        let url = self.endpoint.as_deref().map(predict_url);
        let file = self.take_file();

        let Some(url) = url else {
            log::error!("No prediction endpoint configured");
            self.fail(file, AnalysisError::NotConfigured);
            return None;
        };

        let Some(file) = file else {
            log::warn!("Analysis triggered without a selected file");
            self.fail(None, AnalysisError::NoFileSelected);
            return None;
        };

        self.last_request_id += 1;
        let request_id = self.last_request_id;
        log::info!("📤 Uploading {} as request #{}", file.file_name(), request_id);

        self.state = FormState::Loading {
            file: file.clone(),
            request_id,
        };

        Some(AnalysisTicket {
            request_id,
            url,
            file,
        })
    }

    /// Apply the outcome of a request.
    ///
    /// Returns `false` and leaves the state untouched when `request_id` is
    /// not the request currently in flight.
    pub fn finish_analysis(
        &mut self,
        request_id: u64,
        outcome: Result<Prediction, AnalysisError>,
    ) -> bool {
        let file = match std::mem::replace(&mut self.state, FormState::Idle) {
            FormState::Loading {
                file,
                request_id: current,
            } if current == request_id => file,
            other => {
                self.state = other;
                log::warn!("Dropping response for superseded request #{}", request_id);
                return false;
            }
        };

        self.state = match outcome {
            Ok(prediction) => {
                log::info!(
                    "✅ Request #{}: {} ({})",
                    request_id,
                    prediction.label,
                    prediction.probability_percent()
                );
                FormState::Success { file, prediction }
            }
            Err(error) => {
                log::error!("❌ Request #{} failed: {}", request_id, error);
                FormState::Failed {
                    file: Some(file),
                    error,
                    rejected: None,
                }
            }
        };
        true
    }

    /// Run one full analysis with `predictor`.
    ///
    /// Returns whether a request was sent and its outcome applied. The form
    /// is never left loading when this returns.
    pub async fn start_analysis<P>(&mut self, predictor: &P) -> bool
    where
        P: Predictor<F>,
    {
        let Some(ticket) = self.begin_analysis() else {
            return false;
        };
        let outcome = predictor.predict(&ticket.url, &ticket.file).await;
        self.finish_analysis(ticket.request_id, outcome)
    }

    fn take_file(&mut self) -> Option<F> {
        match std::mem::replace(&mut self.state, FormState::Idle) {
            FormState::Idle => None,
            FormState::FileSelected { file }
            | FormState::Loading { file, .. }
            | FormState::Success { file, .. } => Some(file),
            FormState::Failed { file, .. } => file,
        }
    }

    fn fail(&mut self, file: Option<F>, error: AnalysisError) {
        self.state = FormState::Failed {
            file,
            error,
            rejected: None,
        };
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// The active selection, if any.
    pub fn selected_file(&self) -> Option<&F> {
        match &self.state {
            FormState::Idle => None,
            FormState::FileSelected { file }
            | FormState::Loading { file, .. }
            | FormState::Success { file, .. } => Some(file),
            FormState::Failed { file, .. } => file.as_ref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FormState::Loading { .. })
    }

    /// Whether the "start analysis" control should be enabled.
    pub fn can_start(&self) -> bool {
        !self.is_loading() && self.selected_file().is_some()
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        match &self.state {
            FormState::Success { prediction, .. } => Some(prediction),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.state {
            FormState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Whether the last selection failed the CSV check.
    pub fn is_rejected(&self) -> bool {
        matches!(
            self.state,
            FormState::Failed {
                rejected: Some(_),
                ..
            }
        )
    }

    /// User-facing text of the current error.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }

    /// Text shown next to the upload control.
    pub fn status_text(&self) -> String {
        match &self.state {
            FormState::Failed {
                file: None,
                rejected: Some(name),
                ..
            } => format!("{} is not a CSV file", name),
            _ => self
                .selected_file()
                .map(|f| f.file_name())
                .unwrap_or_else(|| NO_FILE_STATUS.to_string()),
        }
    }

    /// What the results area shows.
    pub fn panel(&self) -> Panel {
        match &self.state {
            FormState::Idle | FormState::FileSelected { .. } => Panel::Placeholder,
            FormState::Loading { .. } => Panel::Loading,
            FormState::Success { prediction, .. } => Panel::from(prediction),
            FormState::Failed { error, .. } => Panel::Error(error.to_string()),
        }
    }
}
