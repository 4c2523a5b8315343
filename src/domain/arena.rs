use std::collections::HashMap;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::{MorphologyNode, NodeType};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::geometry::euclidean_distance;
use crate::domain::traits::MorphologyTree;

/// Tree node in the arena-based morphology.
#[derive(Debug)]
pub struct ArenaNode {
    /// Sample data for this node
    pub data: MorphologyNode,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes in insertion order
    pub children: Vec<Index>,
}

/// Arena-based morphology tree.
///
/// Uses generational arena for memory-safe node references and O(1) lookups.
/// Nodes are kept in a per-type index in insertion order, which defines the
/// order of [`MorphologyTree::nodes_by_type`].
#[derive(Debug)]
pub struct MorphologyArena {
    /// Arena storage for all tree nodes
    arena: Arena<ArenaNode>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
    type_index: HashMap<NodeType, Vec<Index>>,
}

impl Default for MorphologyArena {
    fn default() -> Self {
        Self::new()
    }
}

impl MorphologyArena {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            type_index: HashMap::new(),
        }
    }

    /// Insert a node below `parent`, or as the root when `parent` is None.
    ///
    /// Children are appended, so insertion order is child order.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(
        &mut self,
        data: MorphologyNode,
        parent: Option<Index>,
    ) -> DomainResult<Index> {
        match parent {
            Some(parent_idx) if !self.arena.contains(parent_idx) => {
                return Err(DomainError::unknown_node(parent_idx));
            }
            None if self.root.is_some() => return Err(DomainError::MultipleRoots),
            _ => {}
        }

        let node_type = data.node_type;
        let node_idx = self.arena.insert(ArenaNode {
            data,
            parent,
            children: Vec::new(),
        });

        match parent.and_then(|p| self.arena.get_mut(p)) {
            Some(parent_node) => parent_node.children.push(node_idx),
            None => self.root = Some(node_idx),
        }
        self.type_index.entry(node_type).or_default().push(node_idx);

        Ok(node_idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&ArenaNode> {
        self.arena.get(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Number of levels from the root to the deepest leaf; 0 for empty trees.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        // iterative: reconstructed neurites are long unbranched chains
        let mut max_depth = 0;
        let mut stack = vec![(root, 1)];
        while let Some((idx, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(node) = self.get_node(idx) {
                stack.extend(node.children.iter().map(|&child| (child, depth + 1)));
            }
        }
        max_depth
    }

    /// All nodes without children, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_nodes(&self) -> Vec<Index> {
        self.iter()
            .filter(|(_, node)| node.children.is_empty())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// All nodes with two or more children, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn branch_points(&self) -> Vec<Index> {
        self.iter()
            .filter(|(_, node)| node.children.len() >= 2)
            .map(|(idx, _)| idx)
            .collect()
    }

    fn arena_node(&self, idx: Index) -> DomainResult<&ArenaNode> {
        self.arena
            .get(idx)
            .ok_or_else(|| DomainError::unknown_node(idx))
    }
}

impl MorphologyTree for MorphologyArena {
    type Id = Index;

    fn nodes_by_type(&self, node_type: NodeType) -> Vec<Index> {
        self.type_index.get(&node_type).cloned().unwrap_or_default()
    }

    fn node(&self, id: Index) -> DomainResult<&MorphologyNode> {
        Ok(&self.arena_node(id)?.data)
    }

    fn children(&self, id: Index) -> DomainResult<&[Index]> {
        Ok(&self.arena_node(id)?.children)
    }

    #[instrument(level = "trace", skip(self))]
    fn segment_length(&self, ancestor: Index, descendant: Index) -> DomainResult<f64> {
        self.arena_node(ancestor)?;
        let mut length = 0.0;
        let mut current = descendant;
        while current != ancestor {
            let node = self.arena_node(current)?;
            let parent_idx = node
                .parent
                .ok_or_else(|| DomainError::not_ancestor(ancestor, descendant))?;
            let parent = self.arena_node(parent_idx)?;
            length += euclidean_distance(&parent.data.position, &node.data.position);
            current = parent_idx;
        }
        Ok(length)
    }
}

pub struct PreOrderIterator<'a> {
    arena: &'a MorphologyArena,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(arena: &'a MorphologyArena) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a ArenaNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current_idx = self.stack.pop()?;
        let node = self.arena.get_node(current_idx)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((current_idx, node))
    }
}
