//! MedScan Common Library
//!
//! Web(WASM)クライアントで共有される型とユーティリティ

pub mod error;
pub mod format;
pub mod parser;
pub mod stats;
pub mod types;
pub mod workflow;

pub use error::{Error, Result};
pub use format::{format_report_date, format_scan_error, format_scan_result};
pub use parser::{parse_reports_response, parse_scan_response};
pub use stats::SummaryStats;
pub use types::{LabValue, Report, ReportsResponse, ScanResult, Severity};
pub use workflow::{validate_image_type, validate_query, ScanPhase};
