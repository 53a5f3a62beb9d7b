use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// shape of the upstream routing API used for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApiStyle {
    /// one distance matrix call per (mode, slot) covers every person
    #[default]
    Matrix,
    /// one directions call per (person, slot, leg) in that person's mode
    Directions,
}
