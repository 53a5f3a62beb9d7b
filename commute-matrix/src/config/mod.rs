mod commute_config;
mod time_window_config;

pub use commute_config::CommuteConfiguration;
pub use time_window_config::TimeWindowConfig;
