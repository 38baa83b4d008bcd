use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a junction's position in the graph's junction collection, which is its
/// graph identity (file order is preserved during construction).
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash,
)]
pub struct JunctionId(pub usize);

impl Display for JunctionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
