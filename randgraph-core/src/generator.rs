//! The relationship generator contract.
//!
//! A [`RelationshipGenerator`] owns a validated configuration and produces the
//! complete edge set of one random graph. It performs no store I/O; the caller
//! hands the edges to a [`crate::NodeCreator`] / [`crate::RelationshipCreator`]
//! pipeline. Random sources are always passed in explicitly so tests can inject
//! seeded generators without touching process-wide state.

use std::fmt;

use rand::{RngCore, SeedableRng, rngs::SmallRng};
use tracing::{field, instrument, warn};

use crate::{Result, config::GeneratorConfig, error::GeneratorError, pair::Edge};

/// Produces the edge set of a random graph model.
///
/// Implementors supply [`do_generate_edges`](Self::do_generate_edges), the
/// model-specific hook. Callers use the provided `generate_edges*` methods,
/// which refuse to run on an invalid configuration before delegating to the
/// hook.
///
/// Every successful call returns exactly the configured number of distinct,
/// loop-free edges whose endpoints lie in `[0, number_of_nodes)`.
///
/// # Examples
/// ```
/// use randgraph_core::{ErdosRenyiConfig, ErdosRenyiGenerator, RelationshipGenerator};
///
/// let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(2, 1));
/// let edges = generator.generate_edges_seeded(7)?;
/// assert_eq!(edges.len(), 1);
/// assert!(edges[0].contains(&0) && edges[0].contains(&1));
/// # Ok::<(), randgraph_core::GeneratorError>(())
/// ```
pub trait RelationshipGenerator: fmt::Debug {
    /// Short name of the random-graph model, used in diagnostics.
    fn model(&self) -> &'static str;

    /// Configuration this generator was built from.
    fn configuration(&self) -> &dyn GeneratorConfig;

    /// Number of nodes in the generated graph.
    fn number_of_nodes(&self) -> usize {
        self.configuration().number_of_nodes()
    }

    /// Model-specific edge sampling. Only invoked on a valid configuration.
    ///
    /// # Errors
    /// Returns [`GeneratorError::NotConverged`] when the sampler gives up, or
    /// [`GeneratorError::CapacityOverflow`] when the edge set cannot be held in
    /// memory.
    fn do_generate_edges(&self, rng: &mut dyn RngCore) -> Result<Vec<Edge>>;

    /// Validates the configuration and generates edges from `rng`.
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidConfiguration`] when the configuration
    /// is infeasible, and any error raised by
    /// [`do_generate_edges`](Self::do_generate_edges).
    fn generate_edges_with(&self, rng: &mut dyn RngCore) -> Result<Vec<Edge>> {
        run_generator(self, rng)
    }

    /// Generates edges from a [`SmallRng`] seeded with `seed`.
    ///
    /// Two calls with the same seed return identical edge sequences.
    ///
    /// # Errors
    /// See [`generate_edges_with`](Self::generate_edges_with).
    fn generate_edges_seeded(&self, seed: u64) -> Result<Vec<Edge>> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate_edges_with(&mut rng)
    }

    /// Generates edges from a freshly entropy-seeded [`SmallRng`].
    ///
    /// # Errors
    /// See [`generate_edges_with`](Self::generate_edges_with).
    fn generate_edges(&self) -> Result<Vec<Edge>> {
        let mut rng = SmallRng::from_entropy();
        self.generate_edges_with(&mut rng)
    }
}

#[instrument(
    name = "generator.generate",
    err,
    skip(generator, rng),
    fields(
        model = generator.model(),
        nodes = generator.number_of_nodes(),
        edges = field::Empty,
    ),
)]
fn run_generator<G>(generator: &G, rng: &mut dyn RngCore) -> Result<Vec<Edge>>
where
    G: RelationshipGenerator + ?Sized,
{
    if let Err(error) = generator.configuration().check() {
        warn!(code = %error.code(), %error, "refusing to generate from invalid configuration");
        return Err(GeneratorError::InvalidConfiguration(error));
    }
    let edges = generator.do_generate_edges(rng)?;
    tracing::Span::current().record("edges", edges.len());
    Ok(edges)
}
