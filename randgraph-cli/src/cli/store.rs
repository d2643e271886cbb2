//! In-memory node and relationship creators used by the CLI.

use std::fmt;

use randgraph_core::{NodeCreator, RelationshipCreator};
use thiserror::Error;

/// Handle of a node written by [`IndexNodeCreator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the underlying node index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failures raised by the in-memory store.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Nodes must be created densely in index order.
    #[error("node {index} created out of order; expected node {expected}")]
    OutOfOrder {
        /// Index passed by the caller.
        index: usize,
        /// Index the store expected next.
        expected: usize,
    },
    /// A relationship joined a node to itself.
    #[error("refusing to store a self-relationship on node {node}")]
    SelfRelationship {
        /// The repeated endpoint.
        node: NodeId,
    },
}

/// Creates nodes `0, 1, 2, ...` in order.
#[derive(Debug, Default)]
pub struct IndexNodeCreator {
    next: usize,
}

impl IndexNodeCreator {
    /// Number of nodes created so far.
    #[must_use]
    pub const fn created(&self) -> usize {
        self.next
    }
}

impl NodeCreator for IndexNodeCreator {
    type Node = NodeId;
    type Error = StoreError;

    fn create_node(&mut self, index: usize) -> Result<NodeId, StoreError> {
        if index != self.next {
            return Err(StoreError::OutOfOrder {
                index,
                expected: self.next,
            });
        }
        self.next += 1;
        Ok(NodeId(index))
    }
}

/// Records relationships as endpoint pairs.
#[derive(Debug, Default)]
pub struct PairRelationshipCreator {
    written: usize,
}

impl PairRelationshipCreator {
    /// Number of relationships written so far.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }
}

impl RelationshipCreator<NodeId> for PairRelationshipCreator {
    type Relationship = (NodeId, NodeId);
    type Error = StoreError;

    fn create_relationship(
        &mut self,
        first: &NodeId,
        second: &NodeId,
    ) -> Result<(NodeId, NodeId), StoreError> {
        if first == second {
            return Err(StoreError::SelfRelationship { node: *first });
        }
        self.written += 1;
        Ok((*first, *second))
    }
}
