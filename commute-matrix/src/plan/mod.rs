//! request planning and response aggregation. a [`RequestPlan`] lists the
//! upstream calls for one leg of the commute; the [`Aggregator`] folds their
//! replies into a [`crate::model::DurationTable`], outbound leg first.
mod aggregator;
mod commute_planner;
mod request_plan;
mod request_token;
mod route_request;
mod time_anchor;

pub use aggregator::Aggregator;
pub use commute_planner::CommutePlanner;
pub use request_plan::RequestPlan;
pub use request_token::RequestToken;
pub use route_request::RouteRequest;
pub use time_anchor::TimeAnchor;
