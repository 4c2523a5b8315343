//! Branch-point analysis over a morphology tree.
//!
//! Locates the first branch of a typed neurite and walks successive branch-point
//! generations below it, recording path distances and branching angles.

use itertools::Itertools;
use tracing::{debug, info, instrument, trace};

use crate::domain::entities::NodeType;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::geometry::{angle_between, euclidean_distance, nan_mean, vector_between};
use crate::domain::traits::MorphologyTree;

/// Outcome of searching for the first branch point below an origin node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FirstBranch<Id> {
    /// A node with two or more children was reached.
    Branch {
        origin: Id,
        node: Id,
        /// Euclidean distance from origin to branch node
        distance: f64,
    },
    /// The chain from the origin ended in a leaf without branching.
    Unbranched { origin: Id, terminal: Id },
}

impl<Id: Copy> FirstBranch<Id> {
    pub fn origin(&self) -> Id {
        match self {
            FirstBranch::Branch { origin, .. } | FirstBranch::Unbranched { origin, .. } => *origin,
        }
    }

    /// Branch node if found, else the last node of the unbranched chain.
    pub fn node(&self) -> Id {
        match self {
            FirstBranch::Branch { node, .. } => *node,
            FirstBranch::Unbranched { terminal, .. } => *terminal,
        }
    }

    pub fn distance(&self) -> Option<f64> {
        match self {
            FirstBranch::Branch { distance, .. } => Some(*distance),
            FirstBranch::Unbranched { .. } => None,
        }
    }

    pub fn is_branched(&self) -> bool {
        matches!(self, FirstBranch::Branch { .. })
    }
}

/// Find the first branch point below the first node of `origin_type`.
///
/// Follows single children from the origin until a node has two or more
/// children. Reaching a leaf first is a regular outcome, reported as
/// [`FirstBranch::Unbranched`].
///
/// The origin is the first node of `origin_type` in the tree's type index.
/// Callers should pass a type whose first node is the intended origin (for SWC
/// axons, the axon's initial sample).
///
/// # Errors
/// * [`DomainError::OriginNotFound`] if no node has `origin_type`.
#[instrument(level = "debug", skip(tree))]
pub fn locate_first_branch<T: MorphologyTree>(
    tree: &T,
    origin_type: NodeType,
) -> DomainResult<FirstBranch<T::Id>> {
    let candidates = tree.nodes_by_type(origin_type);
    let origin = *candidates
        .first()
        .ok_or(DomainError::OriginNotFound(origin_type))?;
    if candidates.len() > 1 {
        debug!(
            candidates = candidates.len(),
            ?origin,
            "multiple origin candidates, using first in type index"
        );
    }

    let mut current = origin;
    loop {
        match tree.children(current)? {
            [] => {
                info!(?origin, terminal = ?current, "no branch found, single unbranched segment");
                return Ok(FirstBranch::Unbranched {
                    origin,
                    terminal: current,
                });
            }
            [only] => current = *only,
            _ => break,
        }
    }

    let distance = euclidean_distance(&tree.position(origin)?, &tree.position(current)?);
    debug!(?origin, node = ?current, distance, "first branch located");
    Ok(FirstBranch::Branch {
        origin,
        node: current,
        distance,
    })
}

/// Next generation of branch points below `node`.
///
/// Single-child nodes are passed through; leaves reached that way are dropped.
/// Children are visited in tree order, depth first.
#[instrument(level = "trace", skip(tree))]
pub fn next_branch_points<T: MorphologyTree>(tree: &T, node: T::Id) -> DomainResult<Vec<T::Id>> {
    let mut found = Vec::new();
    collect_branch_points(tree, node, &mut found)?;
    Ok(found)
}

/// Append the next generation of branch points below `node` to `found`.
///
/// Uses an explicit stack: unbranched chains in reconstructions can be
/// thousands of samples long.
pub fn collect_branch_points<T: MorphologyTree>(
    tree: &T,
    node: T::Id,
    found: &mut Vec<T::Id>,
) -> DomainResult<()> {
    let mut stack: Vec<T::Id> = tree.children(node)?.iter().rev().copied().collect();
    while let Some(current) = stack.pop() {
        let children = tree.children(current)?;
        if children.len() >= 2 {
            found.push(current);
        } else {
            stack.extend(children.iter().rev().copied());
        }
    }
    Ok(())
}

/// Path distances between successive branch-point generations below `root`.
///
/// Explores `order` generations depth first; each visited branch point adds
/// the tree path length from its parent generation's branch point.
/// `order == 0` yields an empty sequence.
#[instrument(level = "debug", skip(tree))]
pub fn branch_path_distances<T: MorphologyTree>(
    tree: &T,
    root: T::Id,
    order: usize,
) -> DomainResult<Vec<f64>> {
    let mut output = Vec::new();
    accumulate_path_distances(tree, root, order, &mut output)?;
    Ok(output)
}

fn accumulate_path_distances<T: MorphologyTree>(
    tree: &T,
    root: T::Id,
    order: usize,
    output: &mut Vec<f64>,
) -> DomainResult<()> {
    if order == 0 {
        return Ok(());
    }
    for candidate in next_branch_points(tree, root)? {
        if tree.children(candidate)?.is_empty() {
            continue;
        }
        output.push(tree.segment_length(root, candidate)?);
        accumulate_path_distances(tree, candidate, order - 1, output)?;
    }
    Ok(())
}

/// Branching angles (radians) between successive branch-point generations.
///
/// For each visited branch point the next generation decides what is recorded:
/// * none: dead end, nothing recorded
/// * one: no branching event, descend into it
/// * two: angle between the vectors towards both, then descend into each
/// * three or more: NaN-ignoring mean of the pairwise angles among the first
///   three; the traversal stops there
///
/// Bifurcation angles are NaN when a branch point coincides with its root.
#[instrument(level = "debug", skip(tree))]
pub fn branch_angles<T: MorphologyTree>(
    tree: &T,
    root: T::Id,
    order: usize,
) -> DomainResult<Vec<f64>> {
    let mut output = Vec::new();
    accumulate_branch_angles(tree, root, order, &mut output)?;
    Ok(output)
}

fn accumulate_branch_angles<T: MorphologyTree>(
    tree: &T,
    root: T::Id,
    order: usize,
    output: &mut Vec<f64>,
) -> DomainResult<()> {
    if order == 0 {
        return Ok(());
    }
    let candidates = next_branch_points(tree, root)?;
    let root_position = tree.position(root)?;
    let vectors = candidates
        .iter()
        .map(|&c| Ok(vector_between(&root_position, &tree.position(c)?)))
        .collect::<DomainResult<Vec<_>>>()?;

    match vectors.as_slice() {
        [] => trace!(?root, "dead end"),
        [_] => accumulate_branch_angles(tree, candidates[0], order - 1, output)?,
        [first, second] => {
            output.push(angle_between(first, second));
            for &candidate in &candidates {
                if !tree.children(candidate)?.is_empty() {
                    accumulate_branch_angles(tree, candidate, order - 1, output)?;
                }
            }
        }
        _ => {
            let angles: Vec<f64> = vectors
                .iter()
                .take(3)
                .tuple_combinations()
                .map(|(a, b)| angle_between(a, b))
                .collect();
            info!(?root, branches = candidates.len(), "trifurcation");
            output.push(nan_mean(&angles));
        }
    }
    Ok(())
}
