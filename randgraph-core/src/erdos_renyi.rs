//! Erdos-Renyi `G(n, m)` relationship generator.
//!
//! Draws exactly `m` distinct edges uniformly at random from the
//! `n * (n - 1) / 2` edges of the complete graph on `n` nodes. Two samplers
//! share the work:
//!
//! - **sparse** (trial and correct, after Batagelj and Brandes, "Efficient
//!   generation of large random networks", Phys. Rev. E 71, 2005): draw node
//!   pairs, drop loops, and let a set absorb repeated edges;
//! - **dense**: draw distinct indices in `[0, n * (n - 1) / 2)` and map each
//!   through the triangular bijection ([`index_to_edge`](crate::index_to_edge)).
//!
//! Trial sampling slows down sharply as the requested density approaches one
//! because most draws hit edges that are already present, so the generator
//! switches to the dense sampler once more than half of all possible edges
//! are requested (see [`ErdosRenyiConfig::strategy`]).
//!
//! Both samplers run under an attempt budget. Exhausting it surfaces
//! [`GeneratorError::NotConverged`] instead of spinning indefinitely.

use std::{collections::HashSet, hash::Hash, num::NonZeroU64};

use rand::{Rng, RngCore};
use tracing::debug;

use crate::{
    Result,
    bijection::index_to_edge,
    config::{ErdosRenyiConfig, GeneratorConfig, SamplingStrategy},
    error::GeneratorError,
    generator::RelationshipGenerator,
    pair::{Edge, UnorderedPair},
};

/// Default number of draws allowed per requested edge.
pub const DEFAULT_ATTEMPTS_PER_EDGE: NonZeroU64 = match NonZeroU64::new(64) {
    Some(value) => value,
    None => panic!("attempt factor must be non-zero"),
};

/// Smallest attempt budget granted to any generation run.
pub const MIN_ATTEMPT_BUDGET: u64 = 4_096;

/// [`RelationshipGenerator`] for Erdos-Renyi random graphs with a fixed edge
/// count.
///
/// # Examples
/// ```
/// use randgraph_core::{ErdosRenyiConfig, ErdosRenyiGenerator, RelationshipGenerator};
///
/// let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(20, 190));
/// let edges = generator.generate_edges_seeded(42)?;
/// assert_eq!(edges.len(), 190);
/// # Ok::<(), randgraph_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ErdosRenyiGenerator {
    config: ErdosRenyiConfig,
    attempts_per_edge: NonZeroU64,
}

impl ErdosRenyiGenerator {
    /// Creates a generator for `config`.
    ///
    /// The configuration is not checked here; generation refuses to run when
    /// it is invalid.
    #[must_use]
    pub const fn new(config: ErdosRenyiConfig) -> Self {
        Self {
            config,
            attempts_per_edge: DEFAULT_ATTEMPTS_PER_EDGE,
        }
    }

    /// Overrides the number of draws allowed per requested edge before the
    /// sampler reports [`GeneratorError::NotConverged`].
    ///
    /// The total budget never drops below [`MIN_ATTEMPT_BUDGET`].
    #[must_use]
    pub const fn with_attempt_budget(mut self, attempts_per_edge: NonZeroU64) -> Self {
        self.attempts_per_edge = attempts_per_edge;
        self
    }

    /// Returns the Erdos-Renyi configuration.
    #[must_use]
    pub const fn config(&self) -> &ErdosRenyiConfig {
        &self.config
    }

    /// Returns the sampler the dispatcher selects for this configuration.
    #[must_use]
    pub fn strategy(&self) -> SamplingStrategy {
        self.config.strategy()
    }

    fn attempt_budget(&self) -> u64 {
        self.config
            .number_of_edges()
            .saturating_mul(self.attempts_per_edge.get())
            .max(MIN_ATTEMPT_BUDGET)
    }

    /// Allocates a sampler for the full edge set, reporting
    /// [`GeneratorError::CapacityOverflow`] when it cannot be held in memory.
    fn sampler<T: Copy + Eq + Hash>(&self) -> Result<DistinctSampler<T>> {
        let requested = self.config.number_of_edges();
        usize::try_from(requested)
            .ok()
            .and_then(|target| DistinctSampler::new(target, self.attempt_budget()))
            .ok_or(GeneratorError::CapacityOverflow { requested })
    }

    fn sample_sparse(&self, rng: &mut dyn RngCore, sampler: &mut DistinctSampler<Edge>) {
        let nodes = self.config.number_of_nodes();
        while !sampler.is_full() && sampler.has_budget() {
            let origin = rng.gen_range(0..nodes);
            let target = rng.gen_range(0..nodes);
            if origin == target {
                sampler.reject();
                continue;
            }
            sampler.offer(UnorderedPair::new(origin, target));
        }
    }

    fn sample_dense(&self, rng: &mut dyn RngCore, sampler: &mut DistinctSampler<u128>) {
        let max_edges = self.config.max_edges();
        while !sampler.is_full() && sampler.has_budget() {
            sampler.offer(rng.gen_range(0..max_edges));
        }
    }

    fn not_converged<T>(&self, sampler: &DistinctSampler<T>) -> GeneratorError {
        GeneratorError::NotConverged {
            target: self.config.number_of_edges(),
            accepted: sampler.accepted.len() as u64,
            attempts: sampler.attempts,
        }
    }

    fn generate_sparse(&self, rng: &mut dyn RngCore) -> Result<(Vec<Edge>, u64)> {
        let mut sampler = self.sampler()?;
        self.sample_sparse(rng, &mut sampler);
        if !sampler.is_full() {
            return Err(self.not_converged(&sampler));
        }
        let rejected = sampler.rejected();
        Ok((sampler.accepted, rejected))
    }

    fn generate_dense(&self, rng: &mut dyn RngCore) -> Result<(Vec<Edge>, u64)> {
        let mut sampler = self.sampler()?;
        self.sample_dense(rng, &mut sampler);
        if !sampler.is_full() {
            return Err(self.not_converged(&sampler));
        }
        let rejected = sampler.rejected();
        let requested = self.config.number_of_edges();
        let edges = sampler
            .accepted
            .into_iter()
            .map(|index| index_to_edge(index).ok_or(GeneratorError::CapacityOverflow { requested }))
            .collect::<Result<Vec<_>>>()?;
        Ok((edges, rejected))
    }
}

impl RelationshipGenerator for ErdosRenyiGenerator {
    fn model(&self) -> &'static str {
        "erdos-renyi"
    }

    fn configuration(&self) -> &dyn GeneratorConfig {
        &self.config
    }

    fn do_generate_edges(&self, rng: &mut dyn RngCore) -> Result<Vec<Edge>> {
        let strategy = self.strategy();
        let (edges, rejected) = match strategy {
            SamplingStrategy::Sparse => self.generate_sparse(rng)?,
            SamplingStrategy::Dense => self.generate_dense(rng)?,
        };
        debug!(
            %strategy,
            nodes = self.config.number_of_nodes(),
            edges = edges.len(),
            rejected,
            "sampled erdos-renyi edges",
        );
        #[cfg(feature = "metrics")]
        record_metrics(strategy, edges.len(), rejected);
        Ok(edges)
    }
}

#[cfg(feature = "metrics")]
fn record_metrics(strategy: SamplingStrategy, edges: usize, rejected: u64) {
    metrics::counter!("randgraph_edges_generated_total", "strategy" => strategy.as_str())
        .increment(edges as u64);
    metrics::counter!("randgraph_rejected_draws_total", "strategy" => strategy.as_str())
        .increment(rejected);
}

/// Collects distinct values in draw order under an attempt budget.
///
/// Keeping the accepted values in a `Vec` alongside the membership set makes
/// the output order depend only on the random source, not on hash seeds.
struct DistinctSampler<T> {
    seen: HashSet<T>,
    accepted: Vec<T>,
    target: usize,
    attempts: u64,
    budget: u64,
}

impl<T: Copy + Eq + Hash> DistinctSampler<T> {
    /// Returns `None` when room for `target` values cannot be reserved.
    fn new(target: usize, budget: u64) -> Option<Self> {
        let mut seen = HashSet::new();
        seen.try_reserve(target).ok()?;
        let mut accepted = Vec::new();
        accepted.try_reserve_exact(target).ok()?;
        Some(Self {
            seen,
            accepted,
            target,
            attempts: 0,
            budget,
        })
    }

    fn is_full(&self) -> bool {
        self.accepted.len() >= self.target
    }

    fn has_budget(&self) -> bool {
        self.attempts < self.budget
    }

    fn reject(&mut self) {
        self.attempts += 1;
    }

    fn offer(&mut self, value: T) {
        self.attempts += 1;
        if self.seen.insert(value) {
            self.accepted.push(value);
        }
    }

    fn rejected(&self) -> u64 {
        self.attempts - self.accepted.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    use super::*;

    fn assert_simple_graph(edges: &[Edge], nodes: usize, expected: usize) {
        assert_eq!(edges.len(), expected);
        let distinct: HashSet<_> = edges.iter().copied().collect();
        assert_eq!(distinct.len(), expected, "edges must be distinct");
        for edge in edges {
            assert!(!edge.is_loop(), "loop {edge}");
            assert!(*edge.first() < nodes && *edge.second() < nodes, "{edge} out of range");
        }
    }

    #[rstest]
    #[case::sparse(10, 6, SamplingStrategy::Sparse)]
    #[case::sparse_boundary(10, 22, SamplingStrategy::Sparse)]
    #[case::dense_boundary(10, 23, SamplingStrategy::Dense)]
    #[case::complete(20, 190, SamplingStrategy::Dense)]
    #[case::large_sparse(5_000, 2_000, SamplingStrategy::Sparse)]
    fn both_samplers_produce_simple_graphs(
        #[case] nodes: usize,
        #[case] edges: u64,
        #[case] strategy: SamplingStrategy,
    ) {
        let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(nodes, edges));
        assert_eq!(generator.strategy(), strategy);
        let mut rng = SmallRng::seed_from_u64(0xDEC0_DE);
        let generated = generator
            .do_generate_edges(&mut rng)
            .expect("valid configuration must generate");
        assert_simple_graph(&generated, nodes, edges as usize);
    }

    #[test]
    fn complete_graph_contains_every_edge() {
        let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(8, 28));
        let mut rng = SmallRng::seed_from_u64(3);
        let edges: HashSet<_> = generator
            .do_generate_edges(&mut rng)
            .expect("complete graph must generate")
            .into_iter()
            .collect();
        for i in 0..8 {
            for j in (i + 1)..8 {
                assert!(edges.contains(&UnorderedPair::new(i, j)), "missing ({i}, {j})");
            }
        }
    }

    #[test]
    fn exhausted_budget_reports_not_converged() {
        let mut sampler = DistinctSampler::<u128>::new(3, 2).expect("small sampler fits");
        sampler.offer(1);
        sampler.offer(1);
        assert!(!sampler.has_budget());
        assert!(!sampler.is_full());
        assert_eq!(sampler.rejected(), 1);

        let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(10, 3));
        assert_eq!(
            generator.not_converged(&sampler),
            GeneratorError::NotConverged {
                target: 3,
                accepted: 1,
                attempts: 2,
            }
        );
    }

    #[test]
    fn attempt_budget_has_a_floor() {
        let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(10, 1));
        assert_eq!(generator.attempt_budget(), MIN_ATTEMPT_BUDGET);

        let wide = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(100_000, 1_000))
            .with_attempt_budget(NonZeroU64::new(10).expect("non-zero"));
        assert_eq!(wide.attempt_budget(), 10_000);
    }

    #[test]
    fn oversized_sampler_is_not_allocated() {
        assert!(DistinctSampler::<u128>::new(usize::MAX, 1).is_none());
        assert!(DistinctSampler::<Edge>::new(usize::MAX / 2, 1).is_none());
    }

    #[test]
    fn sampler_keeps_draw_order() {
        let mut sampler = DistinctSampler::new(3, 10).expect("small sampler fits");
        for value in [5_u128, 2, 5, 9] {
            sampler.offer(value);
        }
        assert_eq!(sampler.accepted, vec![5, 2, 9]);
        assert!(sampler.is_full());
    }
}
