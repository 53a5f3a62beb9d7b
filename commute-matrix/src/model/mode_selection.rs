use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{Mode, Person};
use crate::CommuteError;

/// operator choice of which travel mode to report for each person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModeSelection {
    /// use the mode stored on each person's roster row
    #[default]
    Preferred,
    /// report the same mode for every person
    Forced(Mode),
}

impl ModeSelection {
    pub fn effective_mode(&self, person: &Person) -> Mode {
        match self {
            ModeSelection::Preferred => person.mode,
            ModeSelection::Forced(mode) => *mode,
        }
    }
}

impl FromStr for ModeSelection {
    type Err = CommuteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preferred" => Ok(ModeSelection::Preferred),
            other => Mode::from_str(other).map(ModeSelection::Forced),
        }
    }
}

impl Display for ModeSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModeSelection::Preferred => write!(f, "preferred"),
            ModeSelection::Forced(mode) => write!(f, "{mode}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ModeSelection;
    use crate::model::{Mode, Person};
    use std::str::FromStr;

    #[test]
    fn test_effective_mode() {
        let person = Person::new("ada", "1 Main St", Mode::Bicycling);
        let preferred = ModeSelection::from_str("preferred").unwrap();
        let forced = ModeSelection::from_str("walking").unwrap();
        assert_eq!(preferred.effective_mode(&person), Mode::Bicycling);
        assert_eq!(forced.effective_mode(&person), Mode::Walking);
    }

    #[test]
    fn test_unknown_selection() {
        assert!(ModeSelection::from_str("Preferred").is_err());
        assert!(ModeSelection::from_str("").is_err());
    }
}
