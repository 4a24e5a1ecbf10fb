//! End-to-end runs of the upload form against a local mock of the
//! prediction service.

use axum::{extract::Multipart, http::StatusCode, routing::post, Json, Router};
use heartcare_cli::{HttpPredictor, LocalFile};
use heartcare_core::{AnalysisError, Panel, UploadForm};
use serde_json::{json, Value};
use std::net::SocketAddr;

const ECG_CSV: &[u8] = b"I,II,III,aVR,aVL,aVF,V1,V2,V3,V4,V5,V6\n0.1,0.2,0.1,0,0,0,0.3,0.2,0.1,0,0,0\n";

/// Mock `/predict`: needs exactly one `ecg_file` part with a file name.
async fn predict(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let mut uploads = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        uploads.push((name, file_name, bytes));
    }

    match uploads.as_slice() {
        [(name, Some(file_name), bytes)] if name == "ecg_file" => {
            if bytes.len() < 20 {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "file too short" })),
                )
            } else if file_name.starts_with("normal") {
                (
                    StatusCode::OK,
                    Json(json!({ "prediction_label": "Normal", "probability_afib": 0.0421 })),
                )
            } else {
                (
                    StatusCode::OK,
                    Json(json!({ "prediction_label": "AFib Detected", "probability_afib": 0.8734 })),
                )
            }
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "expected one ecg_file part" })),
        ),
    }
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "<html>down</html>")
}

async fn garbage() -> (StatusCode, &'static str) {
    (StatusCode::OK, "not json")
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn mock_service() -> String {
    spawn_service(Router::new().route("/predict", post(predict))).await
}

#[tokio::test]
async fn test_afib_prediction() {
    let base = mock_service().await;
    let mut form = UploadForm::new(Some(base));
    form.select_file(Some(LocalFile::new("ecg.csv", "text/csv", ECG_CSV.to_vec())));

    assert!(form.start_analysis(&HttpPredictor::new()).await);

    assert!(!form.is_loading());
    assert!(form.error().is_none());
    assert_eq!(
        form.panel(),
        Panel::Result {
            label: "AFib Detected".into(),
            probability: "87.34%".into()
        }
    );
}

#[tokio::test]
async fn test_file_name_is_sent() {
    let base = mock_service().await;
    let mut form = UploadForm::new(Some(format!("{}/", base)));
    form.select_file(Some(LocalFile::new("normal_sinus.CSV", "", ECG_CSV.to_vec())));

    form.start_analysis(&HttpPredictor::new()).await;

    let prediction = form.prediction().expect("prediction");
    assert_eq!(prediction.label, "Normal");
    assert_eq!(prediction.probability_percent(), "4.21%");
}

#[tokio::test]
async fn test_server_error_message() {
    let base = mock_service().await;
    let mut form = UploadForm::new(Some(base));
    form.select_file(Some(LocalFile::new("ecg.csv", "text/csv", b"I,II\n".to_vec())));

    form.start_analysis(&HttpPredictor::new()).await;

    assert!(!form.is_loading());
    assert!(form.prediction().is_none());
    assert_eq!(form.error_message().as_deref(), Some("file too short"));
}

#[tokio::test]
async fn test_status_text_without_error_body() {
    let base = spawn_service(Router::new().route("/predict", post(broken))).await;
    let mut form = UploadForm::new(Some(base));
    form.select_file(Some(LocalFile::new("ecg.csv", "text/csv", ECG_CSV.to_vec())));

    form.start_analysis(&HttpPredictor::new()).await;

    assert_eq!(form.error_message().as_deref(), Some("Service Unavailable"));
}

#[tokio::test]
async fn test_unparseable_success_body() {
    let base = spawn_service(Router::new().route("/predict", post(garbage))).await;
    let mut form = UploadForm::new(Some(base));
    form.select_file(Some(LocalFile::new("ecg.csv", "text/csv", ECG_CSV.to_vec())));

    form.start_analysis(&HttpPredictor::new()).await;

    assert!(matches!(form.error(), Some(AnalysisError::Parse(_))));
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_unreachable_service() {
    // bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut form = UploadForm::new(Some(format!("http://{}", addr)));
    form.select_file(Some(LocalFile::new("ecg.csv", "text/csv", ECG_CSV.to_vec())));

    form.start_analysis(&HttpPredictor::new()).await;

    assert!(matches!(form.error(), Some(AnalysisError::Transport(_))));
    assert!(form
        .error_message()
        .unwrap()
        .starts_with("HTTP request failed"));
    assert!(!form.is_loading());
}
