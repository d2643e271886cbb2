//! Benchmark parameter types.

use std::fmt;

use randgraph_core::{ErdosRenyiConfig, GeneratorConfig, SamplingStrategy, max_edges};

use crate::error::BenchSetupError;

const PERMILLE: u128 = 1_000;

/// Parameters for one Erdos-Renyi benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DensityBenchParams {
    /// Number of nodes in the graph.
    pub nodes: usize,
    /// Number of edges requested.
    pub edges: u64,
    /// Sampler the dispatcher picks for this configuration.
    pub strategy: SamplingStrategy,
}

impl DensityBenchParams {
    /// Requests `permille` thousandths of the complete graph on `nodes`
    /// nodes, rounded down.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::InfeasibleDensity`] when the rounded edge
    /// count is zero or the resulting configuration is invalid.
    pub fn from_permille(nodes: usize, permille: u16) -> Result<Self, BenchSetupError> {
        let infeasible = || BenchSetupError::InfeasibleDensity { nodes, permille };
        let edges = max_edges(nodes)
            .saturating_mul(u128::from(permille))
            .checked_div(PERMILLE)
            .and_then(|edges| u64::try_from(edges).ok())
            .ok_or_else(infeasible)?;
        let config = ErdosRenyiConfig::new(nodes, edges);
        config.check().map_err(|_| infeasible())?;
        Ok(Self {
            nodes,
            edges,
            strategy: config.strategy(),
        })
    }

    /// Configuration described by these parameters.
    #[must_use]
    pub const fn config(&self) -> ErdosRenyiConfig {
        ErdosRenyiConfig::new(self.nodes, self.edges)
    }
}

impl fmt::Display for DensityBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={},{}", self.nodes, self.edges, self.strategy)
    }
}
