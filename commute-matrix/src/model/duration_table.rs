use std::collections::HashMap;

use super::{Direction, DurationCell, Mode};
use crate::CommuteError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub slot: String,
    pub mode: Mode,
}

impl CellKey {
    pub fn new(slot: &str, mode: Mode) -> CellKey {
        CellKey {
            slot: slot.to_string(),
            mode,
        }
    }
}

/// round-trip durations indexed by roster position, then by (slot name, mode).
#[derive(Debug, Clone, Default)]
pub struct DurationTable {
    rows: Vec<HashMap<CellKey, DurationCell>>,
}

impl DurationTable {
    pub fn new(n_people: usize) -> DurationTable {
        DurationTable {
            rows: vec![HashMap::new(); n_people],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, person: usize, slot: &str, mode: Mode) -> Option<&DurationCell> {
        self.rows
            .get(person)
            .and_then(|row| row.get(&CellKey::new(slot, mode)))
    }

    /// writes one leg of a person's round trip. the outbound leg must create
    /// the cell and the return leg must find it; each leg is recorded once.
    pub fn record_leg(
        &mut self,
        person: usize,
        key: CellKey,
        direction: Direction,
        leg: DurationCell,
    ) -> Result<(), CommuteError> {
        let n_people = self.rows.len();
        let row = self.rows.get_mut(person).ok_or_else(|| {
            CommuteError::InternalError(format!(
                "person index {person} out of range for roster of {n_people}"
            ))
        })?;
        match direction {
            Direction::ToDestination if row.contains_key(&key) => {
                Err(CommuteError::InternalError(format!(
                    "outbound leg for person {person}, slot '{}', mode {} recorded twice",
                    key.slot, key.mode
                )))
            }
            Direction::ToDestination => {
                row.insert(key, leg);
                Ok(())
            }
            Direction::FromDestination => match row.get_mut(&key) {
                Some(cell) => {
                    cell.add_leg(leg);
                    Ok(())
                }
                None => Err(CommuteError::InternalError(format!(
                    "return leg for person {person}, slot '{}', mode {} recorded before its outbound leg",
                    key.slot, key.mode
                ))),
            },
        }
    }
}
