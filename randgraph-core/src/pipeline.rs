//! Composition of a generator with the collaborators that materialise it.
//!
//! The core never calls a [`NodeCreator`] or [`RelationshipCreator`]; it only
//! bundles them with a [`RelationshipGenerator`] and a batch size so the
//! store-writing host receives everything it needs as one unit.

use std::num::NonZeroUsize;

use crate::{error::ConfigError, generator::RelationshipGenerator};

/// Default number of relationships a host writes per batch.
pub const DEFAULT_BATCH_SIZE: NonZeroUsize = match NonZeroUsize::new(1_000) {
    Some(value) => value,
    None => panic!("default batch size must be non-zero"),
};

/// Capability that turns a generated node index into a concrete store node.
pub trait NodeCreator {
    /// Node handle produced by the store.
    type Node;
    /// Failure raised by the store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the node for `index` in `[0, number_of_nodes)`.
    ///
    /// # Errors
    /// Returns the store's error when the node cannot be created.
    fn create_node(&mut self, index: usize) -> Result<Self::Node, Self::Error>;
}

/// Capability that links two concrete store nodes with a relationship.
pub trait RelationshipCreator<N> {
    /// Relationship handle produced by the store.
    type Relationship;
    /// Failure raised by the store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the relationship between `first` and `second`.
    ///
    /// # Errors
    /// Returns the store's error when the relationship cannot be created.
    fn create_relationship(
        &mut self,
        first: &N,
        second: &N,
    ) -> Result<Self::Relationship, Self::Error>;
}

/// A relationship generator bundled with node and relationship creators and
/// the batch size used by the write pipeline.
///
/// The node count is always read from the wrapped generator's configuration,
/// so the two can never diverge.
///
/// # Examples
/// ```
/// use std::convert::Infallible;
///
/// use randgraph_core::{
///     BasicGeneratorConfiguration, ErdosRenyiConfig, ErdosRenyiGenerator, NodeCreator,
///     RelationshipCreator,
/// };
///
/// struct Ids;
/// impl NodeCreator for Ids {
///     type Node = usize;
///     type Error = Infallible;
///     fn create_node(&mut self, index: usize) -> Result<usize, Infallible> { Ok(index) }
/// }
///
/// struct Links;
/// impl RelationshipCreator<usize> for Links {
///     type Relationship = (usize, usize);
///     type Error = Infallible;
///     fn create_relationship(&mut self, a: &usize, b: &usize) -> Result<(usize, usize), Infallible> {
///         Ok((*a, *b))
///     }
/// }
///
/// let generator = ErdosRenyiGenerator::new(ErdosRenyiConfig::new(50, 100));
/// let pipeline = BasicGeneratorConfiguration::new(generator, Ids, Links);
/// assert_eq!(pipeline.number_of_nodes(), 50);
/// assert_eq!(pipeline.batch_size().get(), 1_000);
/// ```
#[derive(Clone, Debug)]
pub struct BasicGeneratorConfiguration<G, N, R> {
    relationship_generator: G,
    node_creator: N,
    relationship_creator: R,
    batch_size: NonZeroUsize,
}

impl<G, N, R> BasicGeneratorConfiguration<G, N, R>
where
    G: RelationshipGenerator,
    N: NodeCreator,
    R: RelationshipCreator<N::Node>,
{
    /// Bundles the generator and creators with the default batch size.
    #[must_use]
    pub const fn new(relationship_generator: G, node_creator: N, relationship_creator: R) -> Self {
        Self {
            relationship_generator,
            node_creator,
            relationship_creator,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Overrides the batch size handed to the write pipeline.
    #[must_use]
    pub const fn with_batch_size(mut self, batch_size: NonZeroUsize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Overrides the batch size from an unchecked count.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroBatchSize`] when `batch_size` is zero.
    pub fn try_with_batch_size(self, batch_size: usize) -> Result<Self, ConfigError> {
        let size = NonZeroUsize::new(batch_size).ok_or(ConfigError::ZeroBatchSize)?;
        Ok(self.with_batch_size(size))
    }

    /// Number of nodes, delegated to the generator's configuration.
    #[must_use]
    pub fn number_of_nodes(&self) -> usize {
        self.relationship_generator.number_of_nodes()
    }

    /// Returns the relationship generator.
    #[must_use]
    pub const fn relationship_generator(&self) -> &G {
        &self.relationship_generator
    }

    /// Returns the node creator.
    #[must_use]
    pub const fn node_creator(&self) -> &N {
        &self.node_creator
    }

    /// Returns the relationship creator.
    #[must_use]
    pub const fn relationship_creator(&self) -> &R {
        &self.relationship_creator
    }

    /// Returns the number of relationships written per batch.
    #[must_use]
    pub const fn batch_size(&self) -> NonZeroUsize {
        self.batch_size
    }

    /// Splits the bundle into its components for the write pipeline.
    #[must_use]
    pub fn into_parts(self) -> PipelineParts<G, N, R> {
        PipelineParts {
            relationship_generator: self.relationship_generator,
            node_creator: self.node_creator,
            relationship_creator: self.relationship_creator,
            batch_size: self.batch_size,
        }
    }
}

/// Owned components of a [`BasicGeneratorConfiguration`].
#[derive(Debug)]
pub struct PipelineParts<G, N, R> {
    /// Generator producing the edge set.
    pub relationship_generator: G,
    /// Creator for store nodes.
    pub node_creator: N,
    /// Creator for store relationships.
    pub relationship_creator: R,
    /// Relationships per write batch.
    pub batch_size: NonZeroUsize,
}

#[cfg(test)]
mod tests {
    use std::{convert::Infallible, num::NonZeroUsize};

    use super::*;
    use crate::{ErdosRenyiConfig, ErdosRenyiGenerator, GeneratorConfig};

    type TestPipeline = BasicGeneratorConfiguration<ErdosRenyiGenerator, CountingNodes, NoopLinks>;

    #[derive(Debug, Default)]
    struct CountingNodes {
        created: usize,
    }

    impl NodeCreator for CountingNodes {
        type Node = usize;
        type Error = Infallible;

        fn create_node(&mut self, index: usize) -> Result<usize, Infallible> {
            self.created += 1;
            Ok(index)
        }
    }

    #[derive(Debug, Default)]
    struct NoopLinks;

    impl RelationshipCreator<usize> for NoopLinks {
        type Relationship = ();
        type Error = Infallible;

        fn create_relationship(&mut self, _: &usize, _: &usize) -> Result<(), Infallible> {
            Ok(())
        }
    }

    fn pipeline(nodes: usize, edges: u64) -> TestPipeline {
        BasicGeneratorConfiguration::new(
            ErdosRenyiGenerator::new(ErdosRenyiConfig::new(nodes, edges)),
            CountingNodes::default(),
            NoopLinks,
        )
    }

    #[test]
    fn node_count_follows_generator() {
        let pipeline = pipeline(17, 3);
        assert_eq!(pipeline.number_of_nodes(), 17);
        assert_eq!(
            pipeline.number_of_nodes(),
            pipeline.relationship_generator().config().number_of_nodes()
        );
    }

    #[test]
    fn batch_size_defaults_and_overrides() {
        let default = pipeline(5, 2);
        assert_eq!(default.batch_size(), DEFAULT_BATCH_SIZE);

        let custom = default.with_batch_size(NonZeroUsize::new(7).expect("non-zero"));
        assert_eq!(custom.batch_size().get(), 7);
    }

    #[test]
    fn zero_batch_size_is_rejected() {
        let err = pipeline(5, 2)
            .try_with_batch_size(0)
            .expect_err("zero batch size must fail");
        assert_eq!(err, ConfigError::ZeroBatchSize);

        let pipeline = pipeline(5, 2)
            .try_with_batch_size(250)
            .expect("positive batch size is accepted");
        assert_eq!(pipeline.batch_size().get(), 250);
    }

    #[test]
    fn parts_expose_components_unchanged() {
        let parts = pipeline(9, 4).into_parts();
        assert_eq!(parts.relationship_generator.config().number_of_edges(), 4);
        assert_eq!(parts.node_creator.created, 0);
        assert_eq!(parts.batch_size, DEFAULT_BATCH_SIZE);
    }
}
