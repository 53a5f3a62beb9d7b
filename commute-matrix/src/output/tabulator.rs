use itertools::Itertools;

use super::{OutputTable, TableLayout, ROSTER_COLUMNS};
use crate::{
    model::{DurationTable, Mode, ModeSelection, Person, TimeSlot},
    CommuteError,
};

/// flattens the accumulated durations into one row per person.
///
/// # Arguments
/// * `people` - roster, in input order
/// * `table` - round trip durations indexed by roster position
/// * `slots` - time slots in generation order, naming the time axis
/// * `modes` - planned modes in enumeration order, naming the mode axis
/// * `selection` - preferred or forced mode, used by the selected-mode layout
/// * `layout` - full (mode, slot) matrix or one column per slot
pub fn tabulate(
    people: &[Person],
    table: &DurationTable,
    slots: &[TimeSlot],
    modes: &[Mode],
    selection: ModeSelection,
    layout: TableLayout,
) -> Result<OutputTable, CommuteError> {
    let derived = match layout {
        TableLayout::SelectedMode => slots.iter().map(|s| s.name.clone()).collect_vec(),
        TableLayout::FullMatrix => modes
            .iter()
            .cartesian_product(slots.iter())
            .map(|(mode, slot)| format!("{mode}_{}", slot.name))
            .collect_vec(),
    };
    let headers = ROSTER_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .chain(derived)
        .collect_vec();

    let rows = people
        .iter()
        .enumerate()
        .map(|(index, person)| {
            let cell = |slot: &TimeSlot, mode: Mode| {
                table
                    .get(index, &slot.name, mode)
                    .map(|c| c.to_string())
                    .ok_or_else(|| {
                        CommuteError::InternalError(format!(
                            "no {mode} duration for person {index} ({}) in slot '{}'",
                            person.name, slot.name
                        ))
                    })
            };
            match layout {
                TableLayout::SelectedMode => {
                    let mode = selection.effective_mode(person);
                    let mut row = vec![
                        person.name.clone(),
                        person.address.clone(),
                        mode.to_string(),
                    ];
                    for slot in slots.iter() {
                        row.push(cell(slot, mode)?);
                    }
                    Ok(row)
                }
                TableLayout::FullMatrix => {
                    let mut row = vec![
                        person.name.clone(),
                        person.address.clone(),
                        person.mode.to_string(),
                    ];
                    for (mode, slot) in modes.iter().cartesian_product(slots.iter()) {
                        row.push(cell(slot, *mode)?);
                    }
                    Ok(row)
                }
            }
        })
        .collect::<Result<Vec<_>, CommuteError>>()?;

    Ok(OutputTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Weekday};
    use chrono_tz::America::New_York;
    use itertools::Itertools;

    use super::tabulate;
    use crate::{
        config::TimeWindowConfig,
        model::{
            CellKey, Direction, DurationCell, DurationTable, Mode, ModeSelection, Person, TimeSlot,
        },
        output::TableLayout,
        time::generate_time_slots,
    };

    fn slots() -> Vec<TimeSlot> {
        let windows = vec![
            TimeWindowConfig::new("7_4", 7, 16),
            TimeWindowConfig::new("8_5", 8, 17),
        ];
        let today = NaiveDate::from_ymd_opt(2024, 1, 3).expect("test invariant failed");
        generate_time_slots(&today, Weekday::Mon, &windows, New_York)
            .expect("test invariant failed: could not build slots")
    }

    /// every cell gets a distinct value: person * 1000 + mode * 100 + slot,
    /// except person 1's walking cells, which failed.
    fn mock_table(people: &[Person], slots: &[TimeSlot]) -> DurationTable {
        let mut table = DurationTable::new(people.len());
        for (p, _) in people.iter().enumerate() {
            for (m, mode) in Mode::ALL.iter().enumerate() {
                for (s, slot) in slots.iter().enumerate() {
                    let cell = if p == 1 && *mode == Mode::Walking {
                        DurationCell::Failed(String::from("ZERO_RESULTS"))
                    } else {
                        DurationCell::Duration((p * 1000 + m * 100 + s) as u64)
                    };
                    let key = CellKey::new(&slot.name, *mode);
                    table
                        .record_leg(p, key, Direction::ToDestination, cell)
                        .expect("test invariant failed: could not record leg");
                }
            }
        }
        table
    }

    fn people() -> Vec<Person> {
        vec![
            Person::new("ada", "1 Main St", Mode::Driving),
            Person::new("bob", "2 Main St", Mode::Walking),
        ]
    }

    #[test]
    fn test_selected_mode_uses_preferred_mode() {
        let people = people();
        let slots = slots();
        let table = mock_table(&people, &slots);
        let out = tabulate(
            &people,
            &table,
            &slots,
            &Mode::ALL,
            ModeSelection::Preferred,
            TableLayout::SelectedMode,
        )
        .unwrap();
        assert_eq!(out.headers, vec!["name", "address", "mode", "7_4", "8_5"]);
        assert_eq!(out.rows[0], vec!["ada", "1 Main St", "driving", "0", "1"]);
        assert_eq!(
            out.rows[1],
            vec!["bob", "2 Main St", "walking", "ZERO_RESULTS", "ZERO_RESULTS"]
        );
    }

    #[test]
    fn test_selected_mode_with_forced_transit() {
        let people = people();
        let slots = slots();
        let table = mock_table(&people, &slots);
        let out = tabulate(
            &people,
            &table,
            &slots,
            &Mode::ALL,
            ModeSelection::Forced(Mode::Transit),
            TableLayout::SelectedMode,
        )
        .unwrap();
        for (p, row) in out.rows.iter().enumerate() {
            assert_eq!(row[2], "transit");
            for (s, slot) in slots.iter().enumerate() {
                let expected = table.get(p, &slot.name, Mode::Transit).unwrap().to_string();
                assert_eq!(row[3 + s], expected);
            }
        }
    }

    #[test]
    fn test_full_matrix_columns() {
        let people = people();
        let slots = slots();
        let table = mock_table(&people, &slots);
        let out = tabulate(
            &people,
            &table,
            &slots,
            &Mode::ALL,
            ModeSelection::Preferred,
            TableLayout::FullMatrix,
        )
        .unwrap();
        assert_eq!(out.headers.len(), Mode::ALL.len() * slots.len() + 3);
        assert_eq!(out.headers.iter().unique().count(), out.headers.len());
        assert_eq!(out.headers[3], "driving_7_4");
        assert_eq!(out.headers[4], "driving_8_5");
        assert_eq!(out.headers[5], "bicycling_7_4");
        // full matrix keeps the stored preferred mode
        assert_eq!(out.rows[1][2], "walking");
        for (p, row) in out.rows.iter().enumerate() {
            assert_eq!(row.len(), out.headers.len());
            for (m, mode) in Mode::ALL.iter().enumerate() {
                for (s, slot) in slots.iter().enumerate() {
                    let column = out.column(&format!("{mode}_{}", slot.name)).unwrap();
                    let expected = table.get(p, &slot.name, *mode).unwrap().to_string();
                    assert_eq!(row[column], expected);
                    assert_eq!(column, 3 + m * slots.len() + s);
                }
            }
        }
    }

    #[test]
    fn test_empty_roster_still_has_headers() {
        let slots = slots();
        let table = DurationTable::new(0);
        let out = tabulate(
            &[],
            &table,
            &slots,
            &Mode::ALL,
            ModeSelection::Preferred,
            TableLayout::FullMatrix,
        )
        .unwrap();
        assert!(out.rows.is_empty());
        assert_eq!(out.headers.len(), 3 + Mode::ALL.len() * slots.len());
    }

    #[test]
    fn test_missing_cell_is_an_error() {
        let people = people();
        let slots = slots();
        let table = DurationTable::new(people.len());
        let result = tabulate(
            &people,
            &table,
            &slots,
            &Mode::ALL,
            ModeSelection::Preferred,
            TableLayout::SelectedMode,
        );
        assert!(result.is_err());
    }
}
