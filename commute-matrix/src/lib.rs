//! computes round-trip commute times between a single destination and a roster
//! of home addresses, for every configured travel mode and daily time window,
//! by batching requests against a distance matrix (or directions) web API.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod plan;
pub mod time;

pub use error::CommuteError;
