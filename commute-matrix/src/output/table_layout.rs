use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how the per-mode durations of each person are flattened into columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum TableLayout {
    /// one column per slot holding the duration of the person's effective mode
    #[default]
    SelectedMode,
    /// one `<mode>_<slot>` column per (mode, slot) pair
    FullMatrix,
}
