use serde::{Deserialize, Serialize};

use super::Mode;

/// one row of the input roster. identity is the row position, duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub address: String,
    pub mode: Mode,
}

impl Person {
    pub fn new(name: &str, address: &str, mode: Mode) -> Person {
        Person {
            name: name.to_string(),
            address: address.to_string(),
            mode,
        }
    }
}
