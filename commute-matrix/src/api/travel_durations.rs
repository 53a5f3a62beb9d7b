use serde::{Deserialize, Serialize};

use crate::model::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    pub value: u64,
    #[serde(default)]
    pub text: Option<String>,
}

/// duration fields shared by matrix elements and directions legs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDurations {
    #[serde(default)]
    pub duration: Option<TextValue>,
    #[serde(default)]
    pub duration_in_traffic: Option<TextValue>,
}

impl TravelDurations {
    /// seconds of travel for the given mode. driving reads the traffic-aware
    /// duration and falls back to the plain duration when the service omits it.
    pub fn select(&self, mode: Mode) -> Option<u64> {
        if mode.uses_traffic_duration() {
            match &self.duration_in_traffic {
                Some(v) => Some(v.value),
                None => {
                    log::warn!("driving route is missing duration_in_traffic, using duration");
                    self.duration.as_ref().map(|v| v.value)
                }
            }
        } else {
            self.duration.as_ref().map(|v| v.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TextValue, TravelDurations};
    use crate::model::Mode;

    fn durations(duration: Option<u64>, in_traffic: Option<u64>) -> TravelDurations {
        TravelDurations {
            duration: duration.map(|value| TextValue { value, text: None }),
            duration_in_traffic: in_traffic.map(|value| TextValue { value, text: None }),
        }
    }

    #[test]
    fn test_driving_uses_traffic_duration() {
        let d = durations(Some(500), Some(800));
        assert_eq!(d.select(Mode::Driving), Some(800));
        assert_eq!(d.select(Mode::Transit), Some(500));
    }

    #[test]
    fn test_driving_falls_back_to_duration() {
        let d = durations(Some(500), None);
        assert_eq!(d.select(Mode::Driving), Some(500));
    }

    #[test]
    fn test_missing_duration() {
        let d = durations(None, Some(800));
        assert_eq!(d.select(Mode::Walking), None);
    }
}
