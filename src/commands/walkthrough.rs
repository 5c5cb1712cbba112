//! Walkthrough command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::list::SinglyLinkedList;
use crate::reports::{
    HumanReportGenerator, JsonReportGenerator, OperationTrace, ReportGenerator,
};

/// Seed used when the command is invoked without values.
const DEFAULT_SEED: &[i32] = &[4, 8, 15, 16, 23, 42];

pub fn execute_walkthrough_command(
    values: &[i32],
    format: OutputFormat,
    max_steps: Option<usize>,
) -> Result<()> {
    eprintln!(
        "{} Running the linked-list walkthrough...",
        style("⛓️").cyan()
    );

    let trace = run_walkthrough(values);

    let report_result = match format {
        OutputFormat::Human => {
            let generator = HumanReportGenerator::new(max_steps);
            generator.generate_report(&trace)
        }
        OutputFormat::Json => {
            let generator = JsonReportGenerator::new();
            generator.generate_report(&trace)
        }
    };

    match report_result {
        Ok(report) => print!("{report}"),
        Err(e) => {
            return Err(e)
                .into_diagnostic()
                .wrap_err("Failed to generate report");
        }
    }

    Ok(())
}

/// Run the full drill set over a list seeded with `values` (or the default
/// seed when empty), recording every operation and its outcome.
pub fn run_walkthrough(values: &[i32]) -> OperationTrace {
    let seed = if values.is_empty() {
        DEFAULT_SEED
    } else {
        values
    };

    let mut trace = OperationTrace::new("Singly linked list walkthrough");
    let mut list = SinglyLinkedList::new();

    for &value in seed {
        list.insert_at_tail(value);
        trace.record(format!("insert_at_tail({value})"), format!("{value} inserted!"));
    }
    trace.record("elements()", list.elements());
    trace.record("len()", list.len().to_string());

    let probe = seed[0];
    trace.record(format!("search({probe})"), list.search(probe).to_string());
    let outcome = if list.delete(probe) {
        format!("{probe} deleted!")
    } else {
        format!("{probe} does not exist!")
    };
    trace.record(format!("delete({probe})"), outcome);

    trace.record("find_mid()", list.find_mid().to_string());
    trace.record("find_nth(1)", list.find_nth(1).to_string());
    trace.record("reverse()", list.reverse());
    trace.record("detect_loop()", list.detect_loop().to_string());
    trace.record("remove_duplicates()", list.remove_duplicates());

    let mut left = SinglyLinkedList::new();
    left.insert_at_tail(1);
    left.insert_at_tail(2);
    let mut right = SinglyLinkedList::new();
    right.insert_at_tail(2);
    right.insert_at_tail(3);
    trace.record("union([1,2], [2,3])", left.union(right));

    // Loop drills run on a scratch list; the loop is never removed, so the
    // list is unusable for anything else afterward.
    let mut looped = SinglyLinkedList::new();
    looped.insert_at_head(2);
    looped.insert_at_head(1);
    looped.insert_loop();
    trace.record(
        "insert_loop() on [1,2]",
        format!("detect_loop() = {}", looped.detect_loop()),
    );

    trace
}
