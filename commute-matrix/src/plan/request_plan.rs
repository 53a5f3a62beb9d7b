use super::RouteRequest;
use crate::model::Direction;

/// the ordered upstream calls for one leg of the commute.
#[derive(Debug, Clone)]
pub struct RequestPlan {
    pub direction: Direction,
    pub requests: Vec<RouteRequest>,
}

impl RequestPlan {
    pub fn new(direction: Direction) -> RequestPlan {
        RequestPlan {
            direction,
            requests: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
