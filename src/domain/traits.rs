//! Morphology tree contract
//!
//! The analysis functions never own node data. They read a single rooted tree
//! through this trait, so any morphology representation providing typed nodes,
//! ordered children and path lengths can be analysed.

use std::fmt::Debug;
use std::hash::Hash;

use crate::domain::entities::{MorphologyNode, NodeType, Point3};
use crate::domain::error::DomainResult;

/// Read-only access to a rooted morphology tree.
pub trait MorphologyTree {
    /// Handle identifying a node within this tree.
    type Id: Copy + Eq + Hash + Debug;

    /// All nodes of the given type, in the tree's type-index order.
    fn nodes_by_type(&self, node_type: NodeType) -> Vec<Self::Id>;

    /// Node data for a handle.
    fn node(&self, id: Self::Id) -> DomainResult<&MorphologyNode>;

    /// Ordered children of a node; empty for leaves.
    fn children(&self, id: Self::Id) -> DomainResult<&[Self::Id]>;

    /// Path length along the tree from `ancestor` down to `descendant`.
    ///
    /// This sums segment lengths; it is not the straight-line distance.
    fn segment_length(&self, ancestor: Self::Id, descendant: Self::Id) -> DomainResult<f64>;

    fn position(&self, id: Self::Id) -> DomainResult<Point3> {
        Ok(self.node(id)?.position)
    }
}
