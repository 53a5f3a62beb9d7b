use serde::{Deserialize, Serialize};

use super::{TravelDurations, STATUS_OK};
use crate::model::{DurationCell, Mode};

/// body of a distance matrix response. `rows[i].elements[j]` answers
/// origin `i` to destination `j`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrixResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub origin_addresses: Vec<String>,
    #[serde(default)]
    pub destination_addresses: Vec<String>,
    #[serde(default)]
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixRow {
    pub elements: Vec<MatrixElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixElement {
    pub status: String,
    #[serde(flatten)]
    pub durations: TravelDurations,
}

impl MatrixElement {
    /// the cell value for this element. a non-OK element becomes a failed
    /// cell; an OK element without the needed duration field is an error.
    pub fn duration_cell(&self, mode: Mode) -> Result<DurationCell, String> {
        if self.status != STATUS_OK {
            return Ok(DurationCell::Failed(self.status.clone()));
        }
        self.durations
            .select(mode)
            .map(DurationCell::Duration)
            .ok_or_else(|| format!("element with status OK has no duration for mode {mode}"))
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceMatrixResponse;
    use crate::model::{DurationCell, Mode};

    #[test]
    fn test_decode_elements() {
        let body = r#"{
            "destination_addresses": ["1 Office Park"],
            "origin_addresses": ["1 Main St", "2 Main St"],
            "rows": [
                {"elements": [{
                    "distance": {"text": "10 km", "value": 10000},
                    "duration": {"text": "8 mins", "value": 500},
                    "duration_in_traffic": {"text": "13 mins", "value": 800},
                    "status": "OK"
                }]},
                {"elements": [{"status": "ZERO_RESULTS"}]}
            ],
            "status": "OK"
        }"#;
        let response: DistanceMatrixResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.rows.len(), 2);
        let first = &response.rows[0].elements[0];
        let second = &response.rows[1].elements[0];
        assert_eq!(first.duration_cell(Mode::Driving).unwrap(), DurationCell::Duration(800));
        assert_eq!(first.duration_cell(Mode::Walking).unwrap(), DurationCell::Duration(500));
        assert_eq!(
            second.duration_cell(Mode::Driving).unwrap(),
            DurationCell::Failed(String::from("ZERO_RESULTS"))
        );
    }

    #[test]
    fn test_ok_element_without_duration() {
        let body = r#"{"status": "OK", "rows": [{"elements": [{"status": "OK"}]}]}"#;
        let response: DistanceMatrixResponse = serde_json::from_str(body).unwrap();
        assert!(response.rows[0].elements[0].duration_cell(Mode::Transit).is_err());
    }
}
