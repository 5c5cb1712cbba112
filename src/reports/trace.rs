use serde::Serialize;

/// Ordered record of the operations a command ran.
#[derive(Debug, Clone, Serialize)]
pub struct OperationTrace {
    title: String,
    steps: Vec<TraceStep>,
}

/// A single operation and its observed outcome.
#[derive(Debug, Clone, Serialize)]
pub struct TraceStep {
    pub operation: String,
    pub outcome: String,
}

impl OperationTrace {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            steps: Vec::new(),
        }
    }

    /// Append an operation and its outcome to the trace.
    pub fn record(&mut self, operation: impl Into<String>, outcome: impl Into<String>) {
        self.steps.push(TraceStep {
            operation: operation.into(),
            outcome: outcome.into(),
        });
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_order() {
        let mut trace = OperationTrace::new("drill");
        trace.record("first()", "a");
        trace.record("second()", "b");

        assert_eq!(trace.title(), "drill");
        assert_eq!(trace.step_count(), 2);
        assert_eq!(trace.steps()[0].operation, "first()");
        assert_eq!(trace.steps()[1].outcome, "b");
    }
}
