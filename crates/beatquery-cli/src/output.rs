//! JSON output formatting

use beatquery_core::CheckReport;
use serde::Serialize;

/// Report for one checked fixture file
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub report: CheckReport,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    status: &'static str,
    total: usize,
    passed: usize,
    files: &'a [FileReport],
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}

/// Print fixture check reports with overall counts
pub fn print_check_reports(files: &[FileReport]) {
    let total = files.iter().map(|f| f.report.total).sum();
    let passed = files.iter().map(|f| f.report.passed).sum();
    let status = if files.iter().all(|f| f.report.is_success()) {
        "success"
    } else {
        "failure"
    };

    print_json(&CheckOutput {
        status,
        total,
        passed,
        files,
    });
}
