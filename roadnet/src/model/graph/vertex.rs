use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the 2-d point primitive shared by junctions and barrier rings. carries
/// no identity beyond its coordinates and is copied freely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub fn new(x: f64, y: f64) -> Vertex {
        Vertex { x, y }
    }

    /// euclidean distance to another vertex in map units
    pub fn distance(&self, other: &Vertex) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// bit-exact key for coordinate lookups. identical source coordinates
    /// produce identical bits, so arc endpoints read from the same dataset
    /// family as the junctions match exactly under either coordinate policy.
    pub fn grid_key(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }

    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.x, self.y)
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::Vertex;

    #[test]
    fn test_distance() {
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_grid_key_matches_for_equal_coordinates() {
        let a = Vertex::new(1.5, -2.25);
        let b = Vertex::new(1.5, -2.25);
        assert_eq!(a.grid_key(), b.grid_key());
        assert_ne!(a.grid_key(), Vertex::new(1.5, -2.26).grid_key());
    }
}
