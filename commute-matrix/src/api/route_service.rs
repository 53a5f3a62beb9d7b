use super::RouteReply;
use crate::{plan::RouteRequest, CommuteError};

/// sends planned requests to a routing service.
pub trait RouteService {
    /// sends every request and returns exactly one reply per request, in
    /// request order, each carrying the token of the request it answers.
    /// an error here aborts the run; non-success HTTP statuses are returned
    /// as replies and judged by the aggregator.
    fn dispatch(&self, requests: &[RouteRequest]) -> Result<Vec<RouteReply>, CommuteError>;
}
