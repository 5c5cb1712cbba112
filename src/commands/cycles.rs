//! Cycles command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::error::ChainspectError;
use crate::graph::CycleGraph;
use crate::reports::{
    HumanReportGenerator, JsonReportGenerator, OperationTrace, ReportGenerator,
};

pub fn execute_cycles_command(
    vertices: usize,
    edges: &[String],
    format: OutputFormat,
    max_steps: Option<usize>,
) -> Result<()> {
    eprintln!("{} Probing the graph for cycles...", style("🔁").cyan());

    let trace = run_cycle_probe(vertices, edges).wrap_err("Failed to build the graph")?;

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

/// Build a graph from `FROM,TO` edge arguments and record the probe.
pub fn run_cycle_probe(
    vertices: usize,
    edges: &[String],
) -> Result<OperationTrace, ChainspectError> {
    let mut trace = OperationTrace::new(format!("Cycle probe over {vertices} vertices"));
    let mut graph = CycleGraph::new(vertices);

    for raw in edges {
        let (from, to) = parse_edge(raw)?;
        graph.add_edge(from, to)?;
        trace.record(format!("add_edge({from}, {to})"), "ok");
    }
    trace.record("has_cycle()", graph.has_cycle().to_string());

    Ok(trace)
}

fn parse_edge(raw: &str) -> Result<(usize, usize), ChainspectError> {
    let parse_error = || ChainspectError::EdgeParse {
        raw: raw.to_string(),
    };

    let mut parts = raw.split(',');
    let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(parse_error());
    };
    let from = from.trim().parse().map_err(|_| parse_error())?;
    let to = to.trim().parse().map_err(|_| parse_error())?;
    Ok((from, to))
}
