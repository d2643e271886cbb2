//! Structural parameters for relationship generators.
//!
//! Configurations are plain immutable values. Construction never fails;
//! feasibility is checked on demand through [`GeneratorConfig::check`] and
//! [`GeneratorConfig::is_valid`], which recompute the answer from the current
//! fields on every call.

use std::fmt;

use crate::error::ConfigError;

/// Smallest node count that admits a single edge.
pub const MIN_NODES: usize = 2;

/// Maximum number of distinct undirected, loop-free edges on `nodes` labelled
/// nodes, `nodes * (nodes - 1) / 2`.
///
/// Computed in `u128` so the product cannot wrap for any `usize` node count.
///
/// # Examples
/// ```
/// use randgraph_core::max_edges;
///
/// assert_eq!(max_edges(0), 0);
/// assert_eq!(max_edges(2), 1);
/// assert_eq!(max_edges(10), 45);
/// ```
#[must_use]
pub fn max_edges(nodes: usize) -> u128 {
    let n = nodes as u128;
    n * n.saturating_sub(1) / 2
}

/// Shared contract of every generator configuration.
pub trait GeneratorConfig: fmt::Debug {
    /// Number of nodes in the universe `[0, number_of_nodes)`.
    fn number_of_nodes(&self) -> usize;

    /// Checks feasibility and reports the first violated constraint.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] describing why the configuration cannot be
    /// realised.
    fn check(&self) -> Result<(), ConfigError>;

    /// Returns `true` when [`check`](Self::check) succeeds.
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }
}

/// Configuration whose only parameter is the node count.
///
/// Serves as the base for model-specific configurations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeCountConfig {
    number_of_nodes: usize,
}

impl NodeCountConfig {
    /// Creates a configuration over `number_of_nodes` nodes.
    #[must_use]
    pub const fn new(number_of_nodes: usize) -> Self {
        Self { number_of_nodes }
    }
}

impl GeneratorConfig for NodeCountConfig {
    fn number_of_nodes(&self) -> usize {
        self.number_of_nodes
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.number_of_nodes < MIN_NODES {
            return Err(ConfigError::TooFewNodes {
                nodes: self.number_of_nodes,
                minimum: MIN_NODES,
            });
        }
        Ok(())
    }
}

/// Sampling algorithm chosen by the density dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SamplingStrategy {
    /// Draw node pairs at random and absorb duplicates in a set.
    Sparse,
    /// Draw distinct edge indices and map them through the triangular
    /// bijection.
    Dense,
}

impl SamplingStrategy {
    /// Short lowercase label used in logs and metrics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sparse => "sparse",
            Self::Dense => "dense",
        }
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`crate::ErdosRenyiGenerator`]: draw exactly
/// `number_of_edges` distinct edges uniformly at random over
/// `number_of_nodes` nodes.
///
/// # Examples
/// ```
/// use randgraph_core::{ErdosRenyiConfig, GeneratorConfig, SamplingStrategy};
///
/// let config = ErdosRenyiConfig::new(10, 45);
/// assert!(config.is_valid());
/// assert_eq!(config.max_edges(), 45);
/// assert_eq!(config.strategy(), SamplingStrategy::Dense);
///
/// assert!(!ErdosRenyiConfig::new(10, 46).is_valid());
/// assert!(!ErdosRenyiConfig::new(10, 0).is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ErdosRenyiConfig {
    nodes: NodeCountConfig,
    number_of_edges: u64,
}

impl ErdosRenyiConfig {
    /// Creates a configuration for `number_of_edges` edges over
    /// `number_of_nodes` nodes.
    #[must_use]
    pub const fn new(number_of_nodes: usize, number_of_edges: u64) -> Self {
        Self {
            nodes: NodeCountConfig::new(number_of_nodes),
            number_of_edges,
        }
    }

    /// Number of edges the generator must produce.
    #[must_use]
    pub const fn number_of_edges(&self) -> u64 {
        self.number_of_edges
    }

    /// Maximum number of edges a simple graph on these nodes can hold.
    #[must_use]
    pub fn max_edges(&self) -> u128 {
        max_edges(self.nodes.number_of_nodes())
    }

    /// Selects the sampling algorithm for this configuration.
    ///
    /// The dense algorithm is used when `4 * number_of_edges` exceeds
    /// `number_of_nodes * (number_of_nodes - 1)`, i.e. when more than half of
    /// all possible edges are requested.
    #[must_use]
    pub fn strategy(&self) -> SamplingStrategy {
        let scaled_edges = u128::from(self.number_of_edges) * 4;
        let potential_edges = self.max_edges() * 2;
        if scaled_edges > potential_edges {
            SamplingStrategy::Dense
        } else {
            SamplingStrategy::Sparse
        }
    }
}

impl GeneratorConfig for ErdosRenyiConfig {
    fn number_of_nodes(&self) -> usize {
        self.nodes.number_of_nodes()
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.nodes.check()?;
        if self.number_of_edges == 0 {
            return Err(ConfigError::NoEdgesRequested);
        }
        let maximum = self.max_edges();
        if u128::from(self.number_of_edges) > maximum {
            return Err(ConfigError::TooManyEdges {
                requested: self.number_of_edges,
                maximum,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(4, 6)]
    #[case(20, 190)]
    #[case(100_000, 4_999_950_000)]
    fn max_edges_matches_triangular_numbers(#[case] nodes: usize, #[case] expected: u128) {
        assert_eq!(max_edges(nodes), expected);
    }

    #[test]
    fn max_edges_does_not_wrap_for_huge_node_counts() {
        let n = usize::MAX as u128;
        assert_eq!(max_edges(usize::MAX), n * (n - 1) / 2);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn node_count_below_minimum_is_invalid(#[case] nodes: usize) {
        let config = NodeCountConfig::new(nodes);
        assert_eq!(
            config.check(),
            Err(ConfigError::TooFewNodes {
                nodes,
                minimum: MIN_NODES,
            })
        );
        assert!(!config.is_valid());
    }

    #[rstest]
    #[case::zero_edges(10, 0, false)]
    #[case::single_edge(10, 1, true)]
    #[case::at_maximum(10, 45, true)]
    #[case::above_maximum(10, 46, false)]
    #[case::pair(2, 1, true)]
    #[case::pair_overfull(2, 2, false)]
    #[case::single_node(1, 1, false)]
    #[case::empty(0, 1, false)]
    fn erdos_renyi_validity(#[case] nodes: usize, #[case] edges: u64, #[case] valid: bool) {
        assert_eq!(ErdosRenyiConfig::new(nodes, edges).is_valid(), valid);
    }

    #[test]
    fn check_reports_first_violation() {
        assert_eq!(
            ErdosRenyiConfig::new(10, 0).check(),
            Err(ConfigError::NoEdgesRequested)
        );
        assert_eq!(
            ErdosRenyiConfig::new(10, 46).check(),
            Err(ConfigError::TooManyEdges {
                requested: 46,
                maximum: 45,
            })
        );
        assert!(matches!(
            ErdosRenyiConfig::new(1, 0).check(),
            Err(ConfigError::TooFewNodes { nodes: 1, .. })
        ));
    }

    #[test]
    fn validity_for_large_node_counts_uses_wide_arithmetic() {
        // 100k nodes: n(n-1) overflows 32 bits and n(n-1)/2 exceeds i32.
        let nodes = 100_000;
        let maximum = 4_999_950_000;
        assert!(ErdosRenyiConfig::new(nodes, maximum).is_valid());
        assert!(!ErdosRenyiConfig::new(nodes, maximum + 1).is_valid());
    }

    #[rstest]
    #[case(10, 6, SamplingStrategy::Sparse)]
    #[case(10, 22, SamplingStrategy::Sparse)]
    #[case(10, 23, SamplingStrategy::Dense)]
    #[case(10, 45, SamplingStrategy::Dense)]
    #[case(2, 1, SamplingStrategy::Dense)]
    #[case(1_000, 1_000, SamplingStrategy::Sparse)]
    fn dispatcher_switches_above_half_density(
        #[case] nodes: usize,
        #[case] edges: u64,
        #[case] expected: SamplingStrategy,
    ) {
        assert_eq!(ErdosRenyiConfig::new(nodes, edges).strategy(), expected);
    }
}
