use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{
    model::{Mode, Person},
    CommuteError,
};

/// columns every roster file must provide, also the leading output columns.
pub const ROSTER_COLUMNS: [&str; 3] = ["name", "address", "mode"];

#[derive(Deserialize)]
struct RosterRow {
    name: String,
    address: String,
    mode: String,
}

/// reads the roster CSV. extra columns are ignored; a missing column or a
/// mode outside of the supported set fails the run before anything is sent.
pub fn read_roster(path: &Path) -> Result<Vec<Person>, CommuteError> {
    let filename = path.to_string_lossy().to_string();
    let csv_error = |source: csv::Error| CommuteError::CsvError {
        path: filename.clone(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(csv_error)?;
    let headers = reader.headers().map_err(csv_error)?.clone();
    for column in ROSTER_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CommuteError::MissingColumn(column.to_string()));
        }
    }
    reader
        .into_deserialize::<RosterRow>()
        .enumerate()
        .map(|(idx, row)| {
            let row = row.map_err(csv_error)?;
            let mode = Mode::from_str(&row.mode).inspect_err(|_| {
                log::error!("roster row {idx} ({}) has an unknown mode", row.name)
            })?;
            Ok(Person {
                name: row.name,
                address: row.address,
                mode,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::read_roster;
    use crate::{model::Mode, CommuteError};

    fn roster_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("test invariant failed");
        file.write_all(contents.as_bytes())
            .expect("test invariant failed: could not write roster");
        file
    }

    #[test]
    fn test_read_roster() {
        let file = roster_file(
            "name,address,mode\nada,\"1 Main St, Springfield\",transit\nbob,2 Main St,driving\n",
        );
        let people = read_roster(file.path()).unwrap();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].address, "1 Main St, Springfield");
        assert_eq!(people[0].mode, Mode::Transit);
        assert_eq!(people[1].mode, Mode::Driving);
    }

    #[test]
    fn test_missing_column() {
        let file = roster_file("name,address\nada,1 Main St\n");
        let result = read_roster(file.path());
        assert!(matches!(result, Err(CommuteError::MissingColumn(c)) if c == "mode"));
    }

    #[test]
    fn test_unknown_mode() {
        let file = roster_file("name,address,mode\nada,1 Main St,Transit\n");
        let result = read_roster(file.path());
        assert!(matches!(result, Err(CommuteError::UnknownMode(m)) if m == "Transit"));
    }

    #[test]
    fn test_header_only() {
        let file = roster_file("mode,address,name,team\n");
        let people = read_roster(file.path()).unwrap();
        assert!(people.is_empty());
    }
}
