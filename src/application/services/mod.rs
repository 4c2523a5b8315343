//! Application services

pub mod extraction;

pub use extraction::{AxonFeatures, FeatureExtractor};
