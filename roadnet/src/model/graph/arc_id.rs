use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an arc's position in the graph's arc collection, which is its graph
/// identity (file order is preserved during construction).
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct ArcId(pub usize);

impl Display for ArcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
