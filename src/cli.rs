use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chainspect",
    about = "⛓️ Classic linked-list drills and directed-graph cycle detection",
    long_about = "chainspect packages the classic singly-linked-list teaching drills (insertion, \
                  deletion, reversal, loop detection, mid-point and nth-from-end queries, \
                  duplicate removal, union) together with a DFS-based directed-graph cycle \
                  detector, and replays them with human-readable or JSON output.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk a singly linked list through the full drill set
    ///
    /// Seeds a list with the given values (appended in order, or a default
    /// seed when none are given) and runs every list operation against it,
    /// recording each operation and its outcome.
    #[command(
        long_about = "Run the complete linked-list drill: tail insertion of the seed values, \
                      rendering, length, search, deletion, mid-point and nth-from-end queries, \
                      in-place reversal, duplicate removal, union of two fixture lists, and loop \
                      insertion plus Floyd's tortoise-and-hare detection on a scratch list."
    )]
    Walkthrough {
        /// Values to seed the list with, appended in order
        #[arg(value_name = "VALUE")]
        values: Vec<i32>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Probe a directed graph for cycles
    ///
    /// Builds a graph from FROM,TO edge arguments and reports whether any
    /// directed cycle exists, using DFS with on-stack marking.
    #[command(
        long_about = "Construct a directed graph over a fixed vertex count from FROM,TO edge \
                      arguments, then run depth-first search with per-vertex visited and on-stack \
                      marking to decide whether the graph contains a cycle. Disconnected graphs, \
                      duplicate edges, and self-loops are all handled."
    )]
    Cycles {
        /// Number of vertices in the graph
        #[arg(long, default_value_t = 3, env = "CHAINSPECT_VERTICES")]
        vertices: usize,

        /// Directed edges written as FROM,TO
        #[arg(value_name = "EDGE")]
        edges: Vec<String>,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        display: DisplayArgs,
    },
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = "human",
        env = "CHAINSPECT_FORMAT"
    )]
    pub format: OutputFormat,
}

/// Common trace display arguments
#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    /// Maximum number of trace steps to display (shows all by default)
    #[arg(long, env = "CHAINSPECT_MAX_STEPS")]
    pub max_steps: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_walkthrough_parses_values_and_format() {
        let cli = Cli::parse_from(["chainspect", "walkthrough", "1", "2", "3", "--format", "json"]);

        match cli.command {
            Commands::Walkthrough { values, format, .. } => {
                assert_eq!(values, vec![1, 2, 3]);
                assert_eq!(format.format, OutputFormat::Json);
            }
            _ => panic!("Expected Walkthrough command"),
        }
    }

    #[test]
    fn test_cycles_defaults() {
        let cli = Cli::parse_from(["chainspect", "cycles", "0,1", "1,0"]);

        match cli.command {
            Commands::Cycles {
                vertices,
                edges,
                format,
                display,
            } => {
                assert_eq!(vertices, 3);
                assert_eq!(edges, vec!["0,1".to_string(), "1,0".to_string()]);
                assert_eq!(format.format, OutputFormat::Human);
                assert_eq!(display.max_steps, None);
            }
            _ => panic!("Expected Cycles command"),
        }
    }
}
