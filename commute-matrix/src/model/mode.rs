use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::CommuteError;

/// travel modes supported by the routing service. the declaration order is the
/// enumeration order used when planning requests and naming output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Driving,
    Bicycling,
    Transit,
    Walking,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Driving, Mode::Bicycling, Mode::Transit, Mode::Walking];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Driving => "driving",
            Mode::Bicycling => "bicycling",
            Mode::Transit => "transit",
            Mode::Walking => "walking",
        }
    }

    /// driving durations come from the traffic-aware field of a route
    /// element, every other mode reads the plain duration.
    pub fn uses_traffic_duration(&self) -> bool {
        matches!(self, Mode::Driving)
    }
}

impl FromStr for Mode {
    type Err = CommuteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(Mode::Driving),
            "bicycling" => Ok(Mode::Bicycling),
            "transit" => Ok(Mode::Transit),
            "walking" => Ok(Mode::Walking),
            _ => Err(CommuteError::UnknownMode(s.to_string())),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Mode;
    use std::str::FromStr;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Mode::from_str("transit").unwrap(), Mode::Transit);
        assert!(Mode::from_str("Transit").is_err());
        assert!(Mode::from_str("DRIVING").is_err());
        assert!(Mode::from_str("flying").is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }

    #[test]
    fn test_only_driving_uses_traffic() {
        let traffic = Mode::ALL
            .iter()
            .filter(|m| m.uses_traffic_duration())
            .collect::<Vec<_>>();
        assert_eq!(traffic, vec![&Mode::Driving]);
    }
}
