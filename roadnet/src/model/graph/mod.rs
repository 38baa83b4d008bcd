mod arc;
mod arc_id;
mod barrier;
mod coordinate_policy;
mod graph_error;
mod junction;
mod junction_id;
mod road_graph;
mod vertex;

pub use arc::Arc;
pub use arc_id::ArcId;
pub use barrier::Barrier;
pub use coordinate_policy::CoordinatePolicy;
pub use graph_error::GraphError;
pub use junction::Junction;
pub use junction_id::JunctionId;
pub use road_graph::RoadGraph;
pub use vertex::Vertex;

use std::collections::HashMap;

/// neighbor junction -> the arc connecting it to the owning junction
pub type AdjacencyList = HashMap<JunctionId, ArcId>;

/// exact-coordinate lookup used to resolve arc endpoints to junctions
pub type VertexIndex = HashMap<(u64, u64), JunctionId>;
