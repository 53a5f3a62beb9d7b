mod commute_app;
mod run;

pub use commute_app::CommuteApp;
pub use run::{run_commute, CommuteRun};
