//! Feature extraction service
//!
//! Runs the full axon analysis: first branch, then branch-point path distances
//! and branching angles below it.

use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::application::features::{
    branch_angles, branch_path_distances, locate_first_branch, FirstBranch,
};
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::domain::MorphologyTree;

/// Morphometric features of one neurite.
#[derive(Debug, Clone, PartialEq)]
pub struct AxonFeatures<Id> {
    /// Euclidean distance from origin to first branch, None if unbranched
    pub first_branch_distance: Option<f64>,
    /// First branch node, or the terminal of an unbranched segment
    pub first_branch_node: Id,
    /// Path distances between branch-point generations below the first branch
    pub path_distances: Vec<f64>,
    /// Branching angles in radians below the first branch
    pub branch_angles: Vec<f64>,
}

/// Service extracting [`AxonFeatures`] from morphologies.
pub struct FeatureExtractor {
    settings: Settings,
}

impl FeatureExtractor {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Extract features from one morphology.
    ///
    /// Unbranched neurites yield empty distance and angle sequences.
    #[instrument(level = "debug", skip(self, tree))]
    pub fn extract<T: MorphologyTree>(&self, tree: &T) -> ApplicationResult<AxonFeatures<T::Id>> {
        let first = locate_first_branch(tree, self.settings.origin_type)?;
        let (path_distances, angles) = match first {
            FirstBranch::Branch { node, .. } => (
                branch_path_distances(tree, node, self.settings.depth_order)?,
                branch_angles(tree, node, self.settings.depth_order)?,
            ),
            FirstBranch::Unbranched { .. } => (Vec::new(), Vec::new()),
        };
        debug!(
            distances = path_distances.len(),
            angles = angles.len(),
            "extracted features"
        );

        Ok(AxonFeatures {
            first_branch_distance: first.distance(),
            first_branch_node: first.node(),
            path_distances,
            branch_angles: angles,
        })
    }

    /// Extract features from many morphologies in parallel.
    ///
    /// Results are in input order; one failing morphology does not affect the others.
    #[instrument(level = "debug", skip_all, fields(count = trees.len()))]
    pub fn extract_batch<T>(&self, trees: &[T]) -> Vec<ApplicationResult<AxonFeatures<T::Id>>>
    where
        T: MorphologyTree + Sync,
        T::Id: Send,
    {
        trees.par_iter().map(|tree| self.extract(tree)).collect()
    }
}
