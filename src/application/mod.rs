//! Application layer: analysis use cases and services
//!
//! This layer orchestrates domain logic over any `MorphologyTree`.

pub mod error;
pub mod features;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use features::{
    branch_angles, branch_path_distances, collect_branch_points, locate_first_branch,
    next_branch_points, FirstBranch,
};
