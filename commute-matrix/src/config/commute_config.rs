use std::{collections::HashSet, str::FromStr};

use chrono_tz::Tz;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::TimeWindowConfig;
use crate::{api::ApiStyle, model::Mode, output::TableLayout, plan::TimeAnchor, CommuteError};

pub const DEFAULT_MATRIX_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/distancematrix/json";
pub const DEFAULT_DIRECTIONS_ENDPOINT: &str =
    "https://maps.googleapis.com/maps/api/directions/json";
pub const DEFAULT_TIME_ZONE: &str = "America/New_York";

/// defines the time windows, routing service and output shape of a commute run.
/// built once at startup and shared read-only by every stage.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct CommuteConfiguration {
    pub time_windows: Vec<TimeWindowConfig>,
    /// IANA name of the destination's time zone
    pub time_zone: String,
    pub modes: Vec<Mode>,
    pub api: ApiStyle,
    pub layout: TableLayout,
    pub outbound_anchor: TimeAnchor,
    pub matrix_endpoint: String,
    pub directions_endpoint: String,
    /// maximum number of requests in flight while dispatching
    pub parallelism: usize,
}

impl Default for CommuteConfiguration {
    fn default() -> Self {
        Self {
            time_windows: vec![
                TimeWindowConfig::new("6_3", 6, 15),
                TimeWindowConfig::new("7_4", 7, 16),
                TimeWindowConfig::new("8_5", 8, 17),
                TimeWindowConfig::new("9_6", 9, 18),
                TimeWindowConfig::new("10_7", 10, 19),
                TimeWindowConfig::new("11_8", 11, 20),
            ],
            time_zone: String::from(DEFAULT_TIME_ZONE),
            modes: Mode::ALL.to_vec(),
            api: ApiStyle::default(),
            layout: TableLayout::default(),
            outbound_anchor: TimeAnchor::default(),
            matrix_endpoint: String::from(DEFAULT_MATRIX_ENDPOINT),
            directions_endpoint: String::from(DEFAULT_DIRECTIONS_ENDPOINT),
            parallelism: 8,
        }
    }
}

impl CommuteConfiguration {
    pub fn time_zone(&self) -> Result<Tz, CommuteError> {
        Tz::from_str(&self.time_zone)
            .map_err(|_| CommuteError::UnknownTimeZone(self.time_zone.clone()))
    }

    /// the configured modes, deduplicated and in enumeration order.
    pub fn planned_modes(&self) -> Vec<Mode> {
        self.modes.iter().copied().sorted().dedup().collect_vec()
    }

    pub fn endpoint(&self) -> &str {
        match self.api {
            ApiStyle::Matrix => &self.matrix_endpoint,
            ApiStyle::Directions => &self.directions_endpoint,
        }
    }

    /// checks everything that can be checked before a request is sent.
    pub fn validate(&self) -> Result<(), CommuteError> {
        if self.time_windows.is_empty() {
            return Err(CommuteError::ConfigurationError(String::from(
                "at least one time window is required",
            )));
        }
        for window in self.time_windows.iter() {
            window.validate()?;
        }
        let mut names = HashSet::new();
        for window in self.time_windows.iter() {
            if !names.insert(window.name.as_str()) {
                return Err(CommuteError::InvalidTimeWindow {
                    name: window.name.clone(),
                    message: String::from("time window names must be unique"),
                });
            }
        }
        self.time_zone()?;
        if self.modes.is_empty() {
            return Err(CommuteError::ConfigurationError(String::from(
                "at least one travel mode is required",
            )));
        }
        if self.parallelism == 0 {
            return Err(CommuteError::ConfigurationError(String::from(
                "parallelism must be at least 1",
            )));
        }
        if self.api == ApiStyle::Directions && self.layout == TableLayout::FullMatrix {
            return Err(CommuteError::ConfigurationError(String::from(
                "the full_matrix layout requires the matrix api, directions results have one mode per person",
            )));
        }
        Ok(())
    }
}

impl TryFrom<&String> for CommuteConfiguration {
    type Error = CommuteError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = || {
            std::fs::read_to_string(f).map_err(|e| {
                CommuteError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        if f.ends_with(".toml") {
            let s = read()?;
            toml::from_str(&s).map_err(|e| {
                CommuteError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = read()?;
            serde_json::from_str(&s).map_err(|e| {
                CommuteError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(CommuteError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
