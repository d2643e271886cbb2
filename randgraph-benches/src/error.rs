//! Benchmark setup error type.

use randgraph_core::GeneratorError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generator rejected the benchmark configuration.
    #[error("generator setup failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A density fraction produced an edge count outside the feasible range.
    #[error("{permille} permille of {nodes} nodes is not a feasible edge count")]
    InfeasibleDensity {
        /// Node count of the benchmark graph.
        nodes: usize,
        /// Requested density in thousandths of the complete graph.
        permille: u16,
    },
}
