mod mocks;

#[allow(unused_imports)]
pub use mocks::MockFile;

use csv_line_codec::core::row::Row;

/// Installs a test logger once; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds the sample rows written by the file round-trip tests.
#[allow(dead_code)]
pub fn sample_rows() -> Vec<Row> {
    vec![
        Row::from_fields(["Job", "Status", "Note"]),
        Row::from_fields(["1185840_202003250942", "JOB_STARTED", ""]),
        Row::from_fields(["1185840_202003250942", "EXECUTING", "copying, then archiving"]),
        Row::from_fields(["1185840_202003250942", "COMPLETE", r#"said "done""#]),
        Row::from_fields(["", "", ""]),
        Row::from_fields([",", "\"", "\",\""]),
    ]
}
