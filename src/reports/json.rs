//! JSON format report generation

use serde_json::json;

use super::{OperationTrace, ReportGenerator};
use crate::error::ChainspectError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, trace: &OperationTrace) -> Result<String, ChainspectError> {
        let report = json!({
            "title": trace.title(),
            "step_count": trace.step_count(),
            "steps": trace.steps(),
        });

        serde_json::to_string_pretty(&report).map_err(ChainspectError::Json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn sample_trace() -> OperationTrace {
        let mut trace = OperationTrace::new("Sample drill");
        trace.record("search(10)", "true");
        trace.record("delete(10)", "10 deleted!");
        trace
    }

    #[test]
    fn test_json_report_structure() {
        let generator = JsonReportGenerator::new();
        let report = generator.generate_report(&sample_trace()).unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["title"], "Sample drill");
        assert_eq!(json["step_count"], 2);

        let steps = json["steps"].as_array().unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0]["operation"], "search(10)");
        assert_eq!(steps[1]["outcome"], "10 deleted!");
    }

    #[test]
    fn test_json_report_empty_trace() {
        let generator = JsonReportGenerator::new();
        let report = generator
            .generate_report(&OperationTrace::new("Empty drill"))
            .unwrap();
        let json: Value = serde_json::from_str(&report).unwrap();

        assert_eq!(json["step_count"], 0);
        assert_eq!(json["steps"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_json_report_pretty_formatting() {
        let generator = JsonReportGenerator::new();
        let report = generator.generate_report(&sample_trace()).unwrap();

        // Pretty formatted JSON should have newlines and indentation
        assert!(report.contains('\n'));
        assert!(report.contains("  "));
    }
}
