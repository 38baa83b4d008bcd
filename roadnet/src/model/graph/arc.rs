use serde::{Deserialize, Serialize};

/// a graph edge corresponding to a road segment.
///
/// `length` is derived from the source polyline geometry, in integer
/// distance units. `max_speed` defaults to zero until attribute data is
/// wired in; it is an extension point, not populated in the current scope.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    pub length: u64,
    pub max_speed: u32,
}

impl Arc {
    pub fn new(length: u64) -> Arc {
        Arc {
            length,
            max_speed: 0,
        }
    }
}
