//! Client-side file type check.
//!
//! Only the declared media type and the file name are inspected; the CSV
//! content itself is never read here.

/// Media type accepted without looking at the file name.
pub const CSV_MEDIA_TYPE: &str = "text/csv";

/// Extension accepted regardless of the declared media type.
pub const CSV_EXTENSION: &str = ".csv";

/// A file the user picked, as far as validation is concerned.
///
/// Implemented by the browser `File` wrapper and by the native `LocalFile`.
pub trait CsvCandidate {
    /// File name as reported by the platform (no directory part).
    fn file_name(&self) -> String;

    /// Declared media type, empty when unknown.
    fn media_type(&self) -> String;

    /// Whether this file passes the CSV check.
    fn is_csv(&self) -> bool {
        is_csv(&self.file_name(), &self.media_type())
    }
}

/// Accept a file when its declared type is CSV or its name ends in `.csv`.
pub fn is_csv(file_name: &str, media_type: &str) -> bool {
    has_csv_media_type(media_type) || has_csv_extension(file_name)
}

fn has_csv_media_type(media_type: &str) -> bool {
    // "text/csv; charset=utf-8" counts as text/csv
    media_type
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(CSV_MEDIA_TYPE))
        .unwrap_or(false)
}

fn has_csv_extension(file_name: &str) -> bool {
    file_name.to_ascii_lowercase().ends_with(CSV_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_extension_accepted_without_media_type() {
        assert!(is_csv("DATA.CSV", ""));
        assert!(is_csv("DATA.CSV", "application/octet-stream"));
        assert!(is_csv("patient_01.Csv", "application/vnd.ms-excel"));
    }

    #[test]
    fn test_csv_media_type_accepted_with_any_name() {
        assert!(is_csv("export", "text/csv"));
        assert!(is_csv("export.txt", "TEXT/CSV; charset=utf-8"));
    }

    #[test]
    fn test_non_csv_rejected() {
        assert!(!is_csv("notes.txt", "text/plain"));
        assert!(!is_csv("ecg.csv.zip", "application/zip"));
        assert!(!is_csv("", ""));
    }

    #[test]
    fn test_extension_must_be_suffix() {
        assert!(!is_csv("csv", ""));
        assert!(!is_csv("my.csvx", ""));
    }

    struct Named(&'static str, &'static str);

    impl CsvCandidate for Named {
        fn file_name(&self) -> String {
            self.0.to_string()
        }

        fn media_type(&self) -> String {
            self.1.to_string()
        }
    }

    #[test]
    fn test_candidate_default_method() {
        assert!(Named("leads.csv", "").is_csv());
        assert!(!Named("leads.json", "application/json").is_csv());
    }
}
