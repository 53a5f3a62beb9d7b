use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    api::{ApiStyle, RouteService},
    config::CommuteConfiguration,
    model::{ModeSelection, Person},
    output::{read_roster, tabulate, OutputTable, TableLayout},
    plan::CommutePlanner,
    time::{generate_time_slots, weekday_from_index},
    CommuteError,
};

/// operator inputs for one run.
#[derive(Debug, Clone)]
pub struct CommuteRun {
    pub api_key: String,
    pub destination: String,
    pub selection: ModeSelection,
    /// 0 = Monday through 6 = Sunday
    pub day_of_week: u8,
    pub input_file: PathBuf,
    pub output_file: PathBuf,
}

/// reads the roster, computes round trip durations through `service` and
/// writes the output table. configuration problems are reported before any
/// request is sent; a failed batch aborts the run before the output file is
/// created.
pub fn run_commute<S>(
    run: &CommuteRun,
    config: &CommuteConfiguration,
    today: &NaiveDate,
    service: &S,
) -> Result<OutputTable, CommuteError>
where
    S: RouteService + ?Sized,
{
    config.validate()?;
    if run.destination.trim().is_empty() {
        return Err(CommuteError::ConfigurationError(String::from(
            "destination address must not be empty",
        )));
    }
    let weekday = weekday_from_index(run.day_of_week)?;
    let tz = config.time_zone()?;
    log::info!("reading roster from {}", run.input_file.display());
    let people = read_roster(&run.input_file)?;
    validate_selection(&people, config, run.selection)?;

    let slots = generate_time_slots(today, weekday, &config.time_windows, tz)?;
    log::info!(
        "computing {} time slots on {weekday} {} for {} people",
        slots.len(),
        slots
            .first()
            .map(|s| s.start.date_naive().to_string())
            .unwrap_or_default(),
        people.len()
    );

    let planner = CommutePlanner::new(config, &run.destination, &run.api_key, run.selection);
    let table = planner.run(&people, &slots, service)?;
    let output = tabulate(
        &people,
        &table,
        &slots,
        &config.planned_modes(),
        run.selection,
        config.layout,
    )?;
    output.write_csv(&run.output_file)?;
    log::info!(
        "wrote {} rows to {}",
        output.rows.len(),
        run.output_file.display()
    );
    Ok(output)
}

/// with the matrix api only the configured modes are requested, so every
/// reported mode must be one of them.
fn validate_selection(
    people: &[Person],
    config: &CommuteConfiguration,
    selection: ModeSelection,
) -> Result<(), CommuteError> {
    if config.api != ApiStyle::Matrix || config.layout != TableLayout::SelectedMode {
        return Ok(());
    }
    let modes = config.planned_modes();
    for person in people.iter() {
        let mode = selection.effective_mode(person);
        if !modes.contains(&mode) {
            return Err(CommuteError::ConfigurationError(format!(
                "{} is reported in mode {mode}, which is not among the configured modes",
                person.name
            )));
        }
    }
    Ok(())
}
