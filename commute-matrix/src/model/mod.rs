mod direction;
mod duration_cell;
mod duration_table;
mod mode;
mod mode_selection;
mod person;
mod time_slot;

pub use direction::Direction;
pub use duration_cell::DurationCell;
pub use duration_table::{CellKey, DurationTable};
pub use mode::Mode;
pub use mode_selection::ModeSelection;
pub use person::Person;
pub use time_slot::TimeSlot;
