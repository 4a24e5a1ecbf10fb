//! Files read from the local disk.

use std::path::Path;

use heartcare_core::{CsvCandidate, CSV_MEDIA_TYPE};

/// Media type used when the extension says nothing useful.
const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// A file loaded into memory, ready to be uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl LocalFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read `path` and guess its media type from the extension.
    pub async fn open(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        // Lossy, so validation still sees the real extension
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self::new(name, guess_media_type(path), bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl CsvCandidate for LocalFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

/// Media type for a path, the way a browser would declare it.
pub fn guess_media_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => CSV_MEDIA_TYPE,
        Some(ext) if ext.eq_ignore_ascii_case("txt") => "text/plain",
        Some(ext) if ext.eq_ignore_ascii_case("json") => "application/json",
        _ => FALLBACK_MEDIA_TYPE,
    }
}
