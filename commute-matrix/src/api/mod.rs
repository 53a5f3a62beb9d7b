mod api_style;
mod directions_response;
mod http_route_service;
mod matrix_response;
mod route_reply;
mod route_service;
mod travel_durations;

pub use api_style::ApiStyle;
pub use directions_response::{DirectionsLeg, DirectionsResponse, DirectionsRoute};
pub use http_route_service::HttpRouteService;
pub use matrix_response::{DistanceMatrixResponse, MatrixElement, MatrixRow};
pub use route_reply::RouteReply;
pub use route_service::RouteService;
pub use travel_durations::{TextValue, TravelDurations};

/// status reported by the routing service for a successful request or element
pub const STATUS_OK: &str = "OK";
