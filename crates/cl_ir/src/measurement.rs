//! Per-scope measurement results.

use serde::{Deserialize, Serialize};

use crate::Location;

/// The unit reported to the user for one function-like scope.
///
/// `start` is where the scope's header begins and `end` is just past the
/// closing token of its body. `length` counts code lines inside the body.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Measurement {
    pub unit_name: String,
    pub start: Location,
    pub end: Location,
    pub length: u32,
}

impl Measurement {
    pub fn new(unit_name: impl Into<String>, start: Location, end: Location, length: u32) -> Self {
        Measurement {
            unit_name: unit_name.into(),
            start,
            end,
            length,
        }
    }
}
