use serde::{Deserialize, Serialize};

use super::TravelDurations;

/// body of a point to point directions response. only the first leg of the
/// first route is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsLeg {
    #[serde(flatten)]
    pub durations: TravelDurations,
}

impl DirectionsResponse {
    /// statuses that describe the route itself rather than the request,
    /// recorded per cell instead of aborting the run.
    pub const ROUTE_FAILURE_STATUSES: [&'static str; 2] = ["ZERO_RESULTS", "NOT_FOUND"];

    pub fn first_leg(&self) -> Option<&DirectionsLeg> {
        self.routes.first().and_then(|route| route.legs.first())
    }
}
