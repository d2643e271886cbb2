//! Command-line interface for generating random graphs.
//!
//! The `erdos-renyi` command samples a `G(n, m)` graph, writes its nodes and
//! relationships through in-memory creators in fixed-size batches, and
//! returns a summary suitable for rendering as a tab-separated edge list.

mod commands;
mod store;

pub use commands::{
    Cli, CliError, Command, ErdosRenyiCommand, ExecutionSummary, render_summary, run_cli,
};
pub use store::{IndexNodeCreator, NodeId, PairRelationshipCreator, StoreError};

#[cfg(test)]
mod tests;
