//! # Report Generation Module
//!
//! Turns an [`OperationTrace`], the ordered record of operations a command
//! ran and what each returned, into human-readable console output or
//! machine-readable JSON.
//!
//! ## Components
//!
//! - **OperationTrace / TraceStep**: serializable record of a run
//! - **HumanReportGenerator**: styled console report
//! - **JsonReportGenerator**: pretty-printed JSON report

mod human;
mod json;
mod trace;

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use trace::{OperationTrace, TraceStep};

use crate::error::ChainspectError;

/// Common interface for report generators.
pub trait ReportGenerator {
    /// Render `trace` into the generator's output format.
    fn generate_report(&self, trace: &OperationTrace) -> Result<String, ChainspectError>;
}
