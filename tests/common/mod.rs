//! Morphology builders shared by the integration tests.
#![allow(dead_code)]

use generational_arena::Index;

use axonmorph::domain::{MorphologyArena, MorphologyNode, NodeType, Point3};

/// Append a node with the next free sample id.
pub fn add(
    tree: &mut MorphologyArena,
    parent: Option<Index>,
    node_type: NodeType,
    p: [f64; 3],
) -> Index {
    let id = tree.len() as u64 + 1;
    tree.insert_node(
        MorphologyNode::new(id, node_type, Point3::new(p[0], p[1], p[2])),
        parent,
    )
    .expect("valid insertion")
}

pub fn axon(tree: &mut MorphologyArena, parent: Index, p: [f64; 3]) -> Index {
    add(tree, Some(parent), NodeType::Axon, p)
}

/// Give `node` two leaf children so that it becomes a branch point.
pub fn make_branch_point(tree: &mut MorphologyArena, node: Index, at: [f64; 3]) {
    axon(tree, node, [at[0] - 0.5, at[1] - 0.5, at[2]]);
    axon(tree, node, [at[0] + 0.5, at[1] - 0.5, at[2]]);
}

/// Perfect binary tree of axon branch points below a soma.
///
/// The root branch point sits at the origin. A branch point at level `l`
/// (root is level 1) has its children at `(±s, -s, 0)` relative to itself with
/// `s = 2^(levels - l)`, so every bifurcation is a right angle. Branch points at
/// the last level end in two leaves.
pub fn binary_axon(levels: u32) -> (MorphologyArena, Index) {
    let mut tree = MorphologyArena::new();
    let soma = add(&mut tree, None, NodeType::Soma, [0.0, 10.0, 0.0]);
    let root = axon(&mut tree, soma, [0.0, 0.0, 0.0]);
    grow(&mut tree, root, [0.0, 0.0, 0.0], 1, levels);
    (tree, root)
}

fn grow(tree: &mut MorphologyArena, node: Index, at: [f64; 3], level: u32, levels: u32) {
    let s = 2f64.powi((levels - level) as i32);
    for dx in [-s, s] {
        let child_at = [at[0] + dx, at[1] - s, at[2]];
        let child = axon(tree, node, child_at);
        if level < levels {
            grow(tree, child, child_at, level + 1, levels);
        }
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
