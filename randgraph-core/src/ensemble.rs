//! Parallel generation of independent random graphs.

use rayon::prelude::*;
use tracing::instrument;

use crate::{Result, generator::RelationshipGenerator, pair::Edge, seed::member_seed};

/// Generates `count` independent edge sets from the same generator in
/// parallel.
///
/// Member `i` is seeded with [`member_seed`]`(base_seed, i)`, so the output is
/// reproducible and ordered by member index regardless of scheduling.
///
/// # Errors
/// Returns the first [`crate::GeneratorError`] raised by any member; no
/// partial ensemble is returned.
///
/// # Examples
/// ```
/// use randgraph_core::{ErdosRenyiConfig, ErdosRenyiGenerator, generate_ensemble};
///
/// let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(30, 40));
/// let ensemble = generate_ensemble(&generator, 4, 9)?;
/// assert_eq!(ensemble.len(), 4);
/// assert!(ensemble.iter().all(|edges| edges.len() == 40));
/// assert_eq!(ensemble, generate_ensemble(&generator, 4, 9)?);
/// # Ok::<(), randgraph_core::GeneratorError>(())
/// ```
#[instrument(
    name = "generator.ensemble",
    err,
    skip(generator),
    fields(model = generator.model()),
)]
pub fn generate_ensemble<G>(generator: &G, count: usize, base_seed: u64) -> Result<Vec<Vec<Edge>>>
where
    G: RelationshipGenerator + Sync + ?Sized,
{
    (0..count)
        .into_par_iter()
        .map(|member| generator.generate_edges_seeded(member_seed(base_seed, member)))
        .collect()
}
