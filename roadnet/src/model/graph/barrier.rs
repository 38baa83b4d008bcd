use super::Vertex;
use geo::{Contains, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// a spatial exclusion region derived from one polygon record, intended to
/// constrain routing near restricted areas.
///
/// holds the full ordered vertex sequence of the record's outer ring, so
/// point-in-polygon and boundary-avoidance queries remain possible
/// downstream. inner rings are not modeled.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barrier {
    pub ring: Vec<Vertex>,
}

impl Barrier {
    pub fn new(ring: Vec<Vertex>) -> Barrier {
        Barrier { ring }
    }

    pub fn vertex_count(&self) -> usize {
        self.ring.len()
    }

    /// converts the ring into a geo polygon for spatial predicates
    pub fn to_polygon(&self) -> Polygon<f64> {
        let exterior: LineString<f64> = self
            .ring
            .iter()
            .map(|v| (v.x, v.y))
            .collect::<Vec<_>>()
            .into();
        Polygon::new(exterior, vec![])
    }

    /// true when the vertex falls strictly inside the barrier region.
    /// points on the boundary are not contained, matching geo's
    /// containment semantics.
    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.to_polygon().contains(&vertex.to_point())
    }
}
