use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

use super::{run_commute, CommuteRun};
use crate::{
    api::{ApiStyle, HttpRouteService},
    config::CommuteConfiguration,
    model::ModeSelection,
    output::TableLayout,
    plan::TimeAnchor,
    CommuteError,
};

/// command line tool computing round-trip commute times between a destination
/// and every address of a roster, per travel mode and daily time window.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommuteApp {
    /// routing service API key
    pub api_key: String,
    /// destination address
    pub address: String,
    /// travel mode to report: preferred, driving, bicycling, transit or walking
    #[arg(short, long, value_parser = parse_mode_selection, default_value = "preferred")]
    pub mode: ModeSelection,
    /// day of week to compute travel times for. 0 = Monday, 1 = Tuesday, ...
    #[arg(short, long, default_value_t = 0)]
    pub day_of_week: u8,
    /// CSV file with name, address and mode columns
    #[arg(short, long, default_value_t = String::from("data.csv"))]
    pub input_file: String,
    /// CSV file duplicating the roster with travel times appended
    #[arg(short, long, default_value_t = String::from("travel_times.csv"))]
    pub output_file: String,
    /// .toml or .json file with time windows, time zone and service settings
    #[arg(long)]
    pub configuration_file: Option<String>,
    /// output layout, overrides the configuration file
    #[arg(long, value_enum)]
    pub layout: Option<TableLayout>,
    /// routing API shape, overrides the configuration file
    #[arg(long, value_enum)]
    pub api: Option<ApiStyle>,
    /// time parameter carrying the slot start on the outbound leg, overrides
    /// the configuration file
    #[arg(long, value_enum)]
    pub outbound_anchor: Option<TimeAnchor>,
    /// maximum requests in flight, overrides the configuration file
    #[arg(long)]
    pub parallelism: Option<usize>,
}

impl CommuteApp {
    /// loads the configuration file (or defaults) and applies command line overrides.
    pub fn configuration(&self) -> Result<CommuteConfiguration, CommuteError> {
        let mut conf = match &self.configuration_file {
            None => CommuteConfiguration::default(),
            Some(f) => {
                log::info!("reading commute configuration from {f}");
                CommuteConfiguration::try_from(f)?
            }
        };
        if let Some(layout) = self.layout {
            conf.layout = layout;
        }
        if let Some(api) = self.api {
            conf.api = api;
        }
        if let Some(anchor) = self.outbound_anchor {
            conf.outbound_anchor = anchor;
        }
        if let Some(parallelism) = self.parallelism {
            conf.parallelism = parallelism;
        }
        conf.validate()?;
        Ok(conf)
    }

    pub fn commute_run(&self) -> CommuteRun {
        CommuteRun {
            api_key: self.api_key.clone(),
            destination: self.address.clone(),
            selection: self.mode,
            day_of_week: self.day_of_week,
            input_file: PathBuf::from(&self.input_file),
            output_file: PathBuf::from(&self.output_file),
        }
    }

    pub fn run(&self) -> Result<(), CommuteError> {
        let conf = self.configuration()?;
        let tz = conf.time_zone()?;
        let today = chrono::Utc::now().with_timezone(&tz).date_naive();
        let service = HttpRouteService::new(conf.parallelism)?;
        run_commute(&self.commute_run(), &conf, &today, &service)?;
        Ok(())
    }
}

fn parse_mode_selection(s: &str) -> Result<ModeSelection, String> {
    ModeSelection::from_str(s).map_err(|e| e.to_string())
}
