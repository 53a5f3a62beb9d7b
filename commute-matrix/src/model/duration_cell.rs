use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// travel time for one (person, slot, mode) combination. a cell is either a
/// whole number of seconds or the status reported by the routing service when
/// no route was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationCell {
    Duration(u64),
    Failed(String),
}

impl DurationCell {
    pub fn is_failed(&self) -> bool {
        matches!(self, DurationCell::Failed(_))
    }

    pub fn seconds(&self) -> Option<u64> {
        match self {
            DurationCell::Duration(s) => Some(*s),
            DurationCell::Failed(_) => None,
        }
    }

    /// folds another leg of the same trip into this cell. a failed cell is
    /// terminal; a failed leg replaces a numeric cell.
    pub fn add_leg(&mut self, leg: DurationCell) {
        match (&*self, leg) {
            (DurationCell::Failed(_), _) => {}
            (DurationCell::Duration(acc), DurationCell::Duration(secs)) => {
                *self = DurationCell::Duration(acc + secs);
            }
            (DurationCell::Duration(_), failed @ DurationCell::Failed(_)) => {
                *self = failed;
            }
        }
    }
}

impl Display for DurationCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationCell::Duration(secs) => write!(f, "{secs}"),
            DurationCell::Failed(status) => write!(f, "{status}"),
        }
    }
}
