use super::{AdjacencyList, ArcId, JunctionId, Vertex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// a graph node corresponding to a road intersection or endpoint, located
/// at a 2-d coordinate.
///
/// the adjacency map pairs each neighbor junction with the arc connecting
/// it to this one. keys are unique; no ordering is guaranteed.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Junction {
    pub vertex: Vertex,
    pub adjacency: AdjacencyList,
}

impl Junction {
    pub fn new(vertex: Vertex) -> Junction {
        Junction {
            vertex,
            adjacency: HashMap::new(),
        }
    }

    /// records `arc` as the connection to `neighbor`, replacing any arc
    /// previously recorded for that neighbor (parallel arcs between the
    /// same junction pair are not modeled).
    pub fn connect(&mut self, neighbor: JunctionId, arc: ArcId) {
        self.adjacency.insert(neighbor, arc);
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_connected(&self) -> bool {
        !self.adjacency.is_empty()
    }
}
