//! Stable DTOs and IDs used across the routeguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - stable string IDs and codes
//! - canonical scan-relative source path handling
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod path;
pub mod report;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use path::SourcePath;
pub use report::{
    Finding, Location, RouteguardData, RouteguardReport, Severity, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
