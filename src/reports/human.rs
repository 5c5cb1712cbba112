//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::{OperationTrace, ReportGenerator};
use crate::error::ChainspectError;

pub struct HumanReportGenerator {
    max_steps: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_steps: Option<usize>) -> Self {
        Self { max_steps }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, trace: &OperationTrace) -> Result<String, ChainspectError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} {}",
            style("⛓️").cyan().bold(),
            style(trace.title()).bold()
        )?;

        if trace.steps().is_empty() {
            writeln!(output, "  {} Nothing to report.", style("ℹ").blue())?;
            return Ok(output);
        }

        let total_steps = trace.step_count();
        let showing_all = self.max_steps.is_none_or(|limit| limit >= total_steps);
        let steps_to_show = match self.max_steps {
            Some(limit) => &trace.steps()[..limit.min(total_steps)],
            None => trace.steps(),
        };

        for step in steps_to_show {
            writeln!(
                output,
                "  {} {} {} {}",
                style("→").dim(),
                style(&step.operation).yellow(),
                style("=").dim(),
                style(&step.outcome).green()
            )?;
        }

        if !showing_all {
            writeln!(
                output,
                "\n{} Showing {} of {} steps.",
                style("ℹ").blue(),
                style(steps_to_show.len()).yellow(),
                style(total_steps).yellow()
            )?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace() -> OperationTrace {
        let mut trace = OperationTrace::new("Sample drill");
        trace.record("insert_at_tail(1)", "1 inserted");
        trace.record("elements()", "1->null");
        trace.record("len()", "1");
        trace
    }

    #[test]
    fn test_human_report_lists_every_step() {
        let generator = HumanReportGenerator::new(None);
        let report = generator.generate_report(&sample_trace()).unwrap();

        assert!(report.contains("Sample drill"));
        assert!(report.contains("insert_at_tail(1)"));
        assert!(report.contains("1->null"));
    }

    #[test]
    fn test_human_report_truncates_at_max_steps() {
        let generator = HumanReportGenerator::new(Some(2));
        let report = generator.generate_report(&sample_trace()).unwrap();

        assert!(report.contains("insert_at_tail(1)"));
        assert!(!report.contains("len()"));
        assert!(report.contains("Showing 2 of 3 steps."));
    }

    #[test]
    fn test_human_report_on_empty_trace() {
        let generator = HumanReportGenerator::new(None);
        let report = generator
            .generate_report(&OperationTrace::new("Empty drill"))
            .unwrap();

        assert!(report.contains("Nothing to report."));
    }
}
