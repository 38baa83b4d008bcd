use super::Vertex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the rule governing how raw dataset coordinates are stored internally.
///
/// one policy applies to the whole pipeline: junction coordinates and arc
/// endpoint keys must live on the same scale, otherwise endpoint resolution
/// silently fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinatePolicy {
    /// keep floating-point coordinates unchanged
    #[default]
    Raw,
    /// round coordinates to the nearest integer grid unit
    Grid,
}

impl CoordinatePolicy {
    pub fn apply(&self, x: f64, y: f64) -> Vertex {
        match self {
            CoordinatePolicy::Raw => Vertex::new(x, y),
            CoordinatePolicy::Grid => Vertex::new(x.round(), y.round()),
        }
    }
}

impl Display for CoordinatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinatePolicy::Raw => write!(f, "raw"),
            CoordinatePolicy::Grid => write!(f, "grid"),
        }
    }
}
