//! Expected shape of the ECG CSV file.
//!
//! Documented to the user only; nothing in this crate checks file content.

/// The 12 standard leads, in column order.
pub const LEADS: [&str; 12] = [
    "I", "II", "III", "aVR", "aVL", "aVF", "V1", "V2", "V3", "V4", "V5", "V6",
];

/// Number of data rows after the header.
pub const EXPECTED_ROWS: usize = 5000;

/// Sampling rate of the recording.
pub const SAMPLING_RATE_HZ: u32 = 500;

/// Header row of a well-formed file.
pub fn header_row() -> String {
    LEADS.join(",")
}

/// Lead names as prose: "I, II, ..., V5, and V6".
fn lead_list() -> String {
    match LEADS.split_last() {
        Some((last, rest)) => format!("{}, and {}", rest.join(", "), last),
        None => String::new(),
    }
}

/// Instructions text shown above the upload control.
pub fn instructions() -> String {
    format!(
        "Please ensure that the CSV file has a header row naming {} columns, organized in the \
         following order: {}. The file must contain exactly {} data rows, and the ECG sampling \
         rate should be {} Hz.",
        LEADS.len(),
        lead_list(),
        EXPECTED_ROWS,
        SAMPLING_RATE_HZ,
    )
}
