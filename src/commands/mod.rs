//! Command implementations for the chainspect CLI
//!
//! - walkthrough: run the full linked-list drill set over a seeded list
//! - cycles: build a directed graph from edge arguments and probe it

pub mod cycles;
pub mod walkthrough;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Walkthrough {
            values,
            format,
            display,
        } => walkthrough::execute_walkthrough_command(&values, format.format, display.max_steps),
        Commands::Cycles {
            vertices,
            edges,
            format,
            display,
        } => cycles::execute_cycles_command(vertices, &edges, format.format, display.max_steps),
    }
}
