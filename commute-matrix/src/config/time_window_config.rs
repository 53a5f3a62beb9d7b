use serde::{Deserialize, Serialize};

use crate::CommuteError;

/// a named daily window such as "8_5", starting and ending on the hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindowConfig {
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl TimeWindowConfig {
    pub fn new(name: &str, start_hour: u32, end_hour: u32) -> TimeWindowConfig {
        TimeWindowConfig {
            name: name.to_string(),
            start_hour,
            end_hour,
        }
    }

    pub fn validate(&self) -> Result<(), CommuteError> {
        let invalid = |message: String| CommuteError::InvalidTimeWindow {
            name: self.name.clone(),
            message,
        };
        if self.name.trim().is_empty() {
            Err(invalid(String::from("name must not be empty")))
        } else if self.start_hour > 23 || self.end_hour > 23 {
            Err(invalid(format!(
                "hours must be in range [0,23], found [{},{}]",
                self.start_hour, self.end_hour
            )))
        } else if self.start_hour >= self.end_hour {
            Err(invalid(format!(
                "start hour must be before end hour, found [{},{}]",
                self.start_hour, self.end_hour
            )))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeWindowConfig;

    #[test]
    fn test_validate() {
        assert!(TimeWindowConfig::new("8_5", 8, 17).validate().is_ok());
        assert!(TimeWindowConfig::new("", 8, 17).validate().is_err());
        assert!(TimeWindowConfig::new("late", 20, 24).validate().is_err());
        assert!(TimeWindowConfig::new("backwards", 17, 8).validate().is_err());
        assert!(TimeWindowConfig::new("empty", 8, 8).validate().is_err());
    }
}
