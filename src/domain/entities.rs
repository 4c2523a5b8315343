//! Domain entities: core data structures

use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Structure type tag of a reconstructed node.
///
/// Codes follow the SWC convention. Codes without a named variant are kept
/// verbatim in `Custom` so that no information is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum NodeType {
    Undefined,
    Soma,
    Axon,
    BasalDendrite,
    ApicalDendrite,
    Custom(u8),
}

impl NodeType {
    /// SWC integer code of this type.
    pub fn code(&self) -> u8 {
        match self {
            NodeType::Undefined => 0,
            NodeType::Soma => 1,
            NodeType::Axon => 2,
            NodeType::BasalDendrite => 3,
            NodeType::ApicalDendrite => 4,
            NodeType::Custom(code) => *code,
        }
    }
}

impl From<u8> for NodeType {
    fn from(code: u8) -> Self {
        match code {
            0 => NodeType::Undefined,
            1 => NodeType::Soma,
            2 => NodeType::Axon,
            3 => NodeType::BasalDendrite,
            4 => NodeType::ApicalDendrite,
            other => NodeType::Custom(other),
        }
    }
}

impl From<NodeType> for u8 {
    fn from(node_type: NodeType) -> Self {
        node_type.code()
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeType::Undefined => write!(f, "undefined"),
            NodeType::Soma => write!(f, "soma"),
            NodeType::Axon => write!(f, "axon"),
            NodeType::BasalDendrite => write!(f, "basal_dendrite"),
            NodeType::ApicalDendrite => write!(f, "apical_dendrite"),
            NodeType::Custom(code) => write!(f, "custom({code})"),
        }
    }
}

/// A position (or displacement) in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Sub for Point3 {
    type Output = Point3;

    fn sub(self, rhs: Point3) -> Point3 {
        Point3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A single reconstructed sample of a neuron morphology.
///
/// Structural relations (parent, children) are owned by the tree holding the node.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphologyNode {
    /// Sample identifier, unique within one morphology
    pub id: u64,
    pub node_type: NodeType,
    pub position: Point3,
}

impl MorphologyNode {
    pub fn new(id: u64, node_type: NodeType, position: Point3) -> Self {
        Self {
            id,
            node_type,
            position,
        }
    }
}

impl fmt::Display for MorphologyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.node_type, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_swc_codes_when_converting_then_named_types_round_through_code() {
        for code in 0u8..=4 {
            assert_eq!(NodeType::from(code).code(), code);
        }
        assert_eq!(NodeType::from(2), NodeType::Axon);
        assert_eq!(NodeType::from(7), NodeType::Custom(7));
    }

    #[test]
    fn given_two_points_when_subtracting_then_returns_componentwise_difference() {
        let d = Point3::new(1.0, 2.0, 3.0) - Point3::new(0.5, 4.0, -1.0);
        assert_eq!(d, Point3::new(0.5, -2.0, 4.0));
    }

    #[test]
    fn given_node_when_displayed_then_shows_id_type_and_position() {
        let node = MorphologyNode::new(3, NodeType::Axon, Point3::new(1.0, 0.0, 2.5));
        assert_eq!(node.to_string(), "3 axon (1, 0, 2.5)");
    }
}
