use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// one leg of the round trip between a home address and the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// home to destination, anchored at the start of a time slot
    ToDestination,
    /// destination to home, departing at the end of a time slot
    FromDestination,
}

impl Direction {
    /// legs in accumulation order. the outbound leg initializes a cell before
    /// the return leg is folded into it.
    pub const ALL: [Direction; 2] = [Direction::ToDestination, Direction::FromDestination];
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::ToDestination => write!(f, "outbound"),
            Direction::FromDestination => write!(f, "return"),
        }
    }
}
