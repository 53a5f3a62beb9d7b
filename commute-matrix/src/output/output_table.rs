use std::path::Path;

use crate::CommuteError;

/// flat rows ready to be written as CSV, roster columns first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl OutputTable {
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// writes the header row followed by every row. the header is written
    /// even when there are no rows.
    pub fn write_csv(&self, path: &Path) -> Result<(), CommuteError> {
        let filename = path.to_string_lossy().to_string();
        let csv_error = |source: csv::Error| CommuteError::CsvError {
            path: filename.clone(),
            source,
        };
        let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
        writer.write_record(&self.headers).map_err(csv_error)?;
        for row in self.rows.iter() {
            writer.write_record(row).map_err(csv_error)?;
        }
        writer.flush().map_err(|source| CommuteError::IoError {
            path: filename.clone(),
            source,
        })
    }
}
