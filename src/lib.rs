//! Morphometric features of reconstructed neuron trees.
//!
//! The crate locates the first branch point of a typed neurite (usually the
//! axon) and derives path distances and branching angles over successive
//! branch-point generations. Trees are read through [`domain::MorphologyTree`];
//! [`domain::MorphologyArena`] is the bundled in-memory implementation.

pub mod application;
pub mod config;
pub mod domain;
pub mod tree_traits;
pub mod util;

pub use application::{
    branch_angles, branch_path_distances, locate_first_branch, next_branch_points,
    ApplicationError, ApplicationResult, FirstBranch,
};
pub use domain::{DomainError, DomainResult, MorphologyArena, MorphologyTree};
