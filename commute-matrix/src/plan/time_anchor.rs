use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::model::{Direction, TimeSlot};

/// which request parameter carries the slot start on the outbound leg. the
/// return leg always departs at the slot end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeAnchor {
    /// leave home at the slot start
    #[default]
    Departure,
    /// arrive at the destination by the slot start
    Arrival,
}

impl TimeAnchor {
    /// query parameter name and epoch seconds for one leg of a slot.
    pub fn time_param(&self, direction: Direction, slot: &TimeSlot) -> (&'static str, i64) {
        match (direction, self) {
            (Direction::ToDestination, TimeAnchor::Departure) => {
                ("departure_time", slot.start_epoch())
            }
            (Direction::ToDestination, TimeAnchor::Arrival) => ("arrival_time", slot.start_epoch()),
            (Direction::FromDestination, _) => ("departure_time", slot.end_epoch()),
        }
    }
}
