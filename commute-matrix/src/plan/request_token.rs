use std::fmt::Display;

use crate::model::{Direction, Mode};

/// labels a request with the table cells its reply fills. replies carry the
/// token of their request so the aggregator never relies on list position alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub direction: Direction,
    pub mode: Mode,
    pub slot: String,
    /// roster index for single-pair requests, `None` when the request covers
    /// the whole roster
    pub person: Option<usize>,
}

impl Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.person {
            None => write!(f, "{} {} slot '{}'", self.direction, self.mode, self.slot),
            Some(p) => write!(
                f,
                "{} {} slot '{}' person {p}",
                self.direction, self.mode, self.slot
            ),
        }
    }
}
