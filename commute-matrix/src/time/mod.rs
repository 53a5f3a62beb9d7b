pub mod time_window_ops;

pub use time_window_ops::{generate_time_slots, next_occurrence, weekday_from_index};
