use chrono::DateTime;
use chrono_tz::Tz;

/// a named daily window on a concrete date, in the destination's time zone.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub name: String,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl TimeSlot {
    /// unix epoch seconds of the slot start
    pub fn start_epoch(&self) -> i64 {
        self.start.timestamp()
    }

    /// unix epoch seconds of the slot end
    pub fn end_epoch(&self) -> i64 {
        self.end.timestamp()
    }
}
