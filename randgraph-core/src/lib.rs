//! Random-graph generation core.
//!
//! Produces edge sets of simple undirected random graphs as
//! [`UnorderedPair`]s of node indices. Generation is synchronous, CPU-bound
//! and free of I/O; persisting the result is left to a host that receives a
//! [`BasicGeneratorConfiguration`] bundling the generator with its
//! [`NodeCreator`] and [`RelationshipCreator`].
//!
//! # Metrics
//!
//! When the `metrics` feature is enabled the Erdos-Renyi generator emits, per
//! successful run and labelled by `strategy` (`sparse` or `dense`):
//!
//! - `randgraph_edges_generated_total` (counter)
//! - `randgraph_rejected_draws_total` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bijection;
mod config;
#[cfg(feature = "parallel")]
mod ensemble;
mod erdos_renyi;
mod error;
mod generator;
mod pair;
mod pipeline;
mod seed;

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub use crate::ensemble::generate_ensemble;
pub use crate::{
    bijection::{edge_to_index, index_to_edge},
    config::{
        ErdosRenyiConfig, GeneratorConfig, MIN_NODES, NodeCountConfig, SamplingStrategy,
        max_edges,
    },
    erdos_renyi::{DEFAULT_ATTEMPTS_PER_EDGE, ErdosRenyiGenerator, MIN_ATTEMPT_BUDGET},
    error::{ConfigError, ConfigErrorCode, GeneratorError, GeneratorErrorCode, Result},
    generator::RelationshipGenerator,
    pair::{Edge, UnorderedPair},
    pipeline::{
        BasicGeneratorConfiguration, DEFAULT_BATCH_SIZE, NodeCreator, PipelineParts,
        RelationshipCreator,
    },
    seed::member_seed,
};
