use super::{AdjacencyList, Arc, ArcId, Barrier, GraphError, Junction, JunctionId};
use serde::{Deserialize, Serialize};

/// the constructed road network: junctions (nodes), arcs (edges), and
/// barriers (exclusion regions).
///
/// collections are append-only during construction and positional: an
/// entity's index is its identity. the graph exclusively owns every entity
/// it holds and is not mutated after construction within this scope.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadGraph {
    junctions: Vec<Junction>,
    arcs: Vec<Arc>,
    barriers: Vec<Barrier>,
}

impl RoadGraph {
    pub fn empty() -> RoadGraph {
        RoadGraph {
            junctions: vec![],
            arcs: vec![],
            barriers: vec![],
        }
    }

    pub fn n_junctions(&self) -> usize {
        self.junctions.len()
    }

    pub fn n_arcs(&self) -> usize {
        self.arcs.len()
    }

    pub fn n_barriers(&self) -> usize {
        self.barriers.len()
    }

    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    pub fn barriers(&self) -> &[Barrier] {
        &self.barriers
    }

    /// appends a junction, returning the id assigned by its position
    pub fn add_junction(&mut self, junction: Junction) -> JunctionId {
        let id = JunctionId(self.junctions.len());
        self.junctions.push(junction);
        id
    }

    /// appends an arc, returning the id assigned by its position
    pub fn add_arc(&mut self, arc: Arc) -> ArcId {
        let id = ArcId(self.arcs.len());
        self.arcs.push(arc);
        id
    }

    pub fn add_barrier(&mut self, barrier: Barrier) {
        self.barriers.push(barrier);
    }

    /// helper with error handling for getting the junction with a given id
    pub fn get_junction(&self, id: &JunctionId) -> Result<&Junction, GraphError> {
        self.junctions
            .get(id.0)
            .ok_or(GraphError::GraphMissingJunctionId(*id))
    }

    /// helper with error handling for getting the arc with a given id
    pub fn get_arc(&self, id: &ArcId) -> Result<&Arc, GraphError> {
        self.arcs.get(id.0).ok_or(GraphError::GraphMissingArcId(*id))
    }

    /// the adjacency map of a junction: neighbor id -> connecting arc id
    pub fn neighbors(&self, id: &JunctionId) -> Result<&AdjacencyList, GraphError> {
        Ok(&self.get_junction(id)?.adjacency)
    }

    /// records the arc connecting two junctions in both endpoints'
    /// adjacency maps. fails if either endpoint is missing from the graph.
    pub fn connect(
        &mut self,
        a: JunctionId,
        b: JunctionId,
        arc_id: ArcId,
    ) -> Result<(), GraphError> {
        if a.0 >= self.junctions.len() {
            return Err(GraphError::GraphMissingJunctionId(a));
        }
        if b.0 >= self.junctions.len() {
            return Err(GraphError::GraphMissingJunctionId(b));
        }
        self.junctions[a.0].connect(b, arc_id);
        self.junctions[b.0].connect(a, arc_id);
        Ok(())
    }

    /// number of junctions with at least one adjacency entry
    pub fn n_connected_junctions(&self) -> usize {
        self.junctions.iter().filter(|j| j.is_connected()).count()
    }

    /// sum of arc lengths in integer distance units
    pub fn total_arc_length(&self) -> u64 {
        self.arcs.iter().map(|a| a.length).sum()
    }
}
