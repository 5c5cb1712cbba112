//! Integration tests for chainspect using the library interface

use chainspect::commands::cycles::run_cycle_probe;
use chainspect::commands::walkthrough::run_walkthrough;
use chainspect::graph::CycleGraph;
use chainspect::list::SinglyLinkedList;
use chainspect::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn list_from(values: &[i32]) -> SinglyLinkedList {
    let mut list = SinglyLinkedList::new();
    for &value in values {
        list.insert_at_tail(value);
    }
    list
}

#[test]
fn list_drill_end_to_end() {
    let mut list = list_from(&[3, 1, 4, 1, 5, 9, 2, 6]);

    assert_eq!(list.len(), 8);
    assert!(list.search(9));
    assert!(!list.search(7));

    assert!(list.delete(9));
    assert_eq!(list.elements(), "3->1->4->1->5->2->6->null");

    assert_eq!(list.remove_duplicates(), "3->1->4->5->2->6->null");
    assert_eq!(list.find_mid(), 4);
    assert_eq!(list.find_nth(2), 2);

    assert_eq!(list.reverse(), "6->2->5->4->1->3->null");
    assert_eq!(list.reverse(), "3->1->4->5->2->6->null");

    assert!(!list.detect_loop());
    list.insert_loop();
    assert!(list.detect_loop());
}

#[test]
fn union_transfers_ownership_and_deduplicates() {
    let mut primes = list_from(&[2, 3, 5]);
    let odds = list_from(&[1, 3, 5, 7]);

    assert_eq!(primes.union(odds), "2->3->5->1->7->null");
    assert_eq!(primes.len(), 5);

    // The merged list keeps working as a normal list.
    assert!(primes.delete(1));
    assert_eq!(primes.elements(), "2->3->5->7->null");
}

#[test]
fn walkthrough_trace_renders_in_both_formats() {
    let trace = run_walkthrough(&[1, 2, 3]);

    let human = HumanReportGenerator::new(None).generate_report(&trace).unwrap();
    assert!(human.contains("Singly linked list walkthrough"));
    assert!(human.contains("1->2->3->null"));

    let json_report = JsonReportGenerator::new().generate_report(&trace).unwrap();
    let json: Value = serde_json::from_str(&json_report).unwrap();
    assert_eq!(json["title"], "Singly linked list walkthrough");
    assert_eq!(
        json["step_count"].as_u64().unwrap() as usize,
        trace.step_count()
    );
}

#[test]
fn cycle_probe_matches_direct_graph_usage() {
    let mut graph = CycleGraph::new(5);
    for (from, to) in [(0, 1), (1, 2), (2, 3), (3, 1), (3, 4)] {
        graph.add_edge(from, to).unwrap();
    }
    assert!(graph.has_cycle());

    let trace = run_cycle_probe(
        5,
        &["0,1", "1,2", "2,3", "3,1", "3,4"].map(|edge| edge.to_string()),
    )
    .unwrap();
    assert_eq!(trace.steps().last().unwrap().outcome, "true");
}

#[test]
fn acyclic_probe_reports_false_in_json() {
    let trace = run_cycle_probe(3, &["0,1".to_string(), "1,2".to_string()]).unwrap();
    let report = JsonReportGenerator::new().generate_report(&trace).unwrap();
    let json: Value = serde_json::from_str(&report).unwrap();

    let steps = json["steps"].as_array().unwrap();
    let last = steps.last().unwrap();
    assert_eq!(last["operation"], "has_cycle()");
    assert_eq!(last["outcome"], "false");
}
