use chrono::{Datelike, NaiveDate, TimeDelta, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::{config::TimeWindowConfig, model::TimeSlot, CommuteError};

/// maps a day index where 0 = Monday through 6 = Sunday onto a weekday.
pub fn weekday_from_index(index: u8) -> Result<Weekday, CommuteError> {
    match index {
        0 => Ok(Weekday::Mon),
        1 => Ok(Weekday::Tue),
        2 => Ok(Weekday::Wed),
        3 => Ok(Weekday::Thu),
        4 => Ok(Weekday::Fri),
        5 => Ok(Weekday::Sat),
        6 => Ok(Weekday::Sun),
        _ => Err(CommuteError::InvalidWeekday(index)),
    }
}

/// date of the next `weekday` strictly after `today`. when today already is
/// that weekday the result is one week out.
pub fn next_occurrence(today: &NaiveDate, weekday: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_monday() as i64;
    let target = weekday.num_days_from_monday() as i64;
    let mut days_ahead = target - current;
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    *today + TimeDelta::days(days_ahead)
}

/// builds the zoned time slots for the next `weekday` after `today`, one per
/// configured window and in configuration order.
///
/// # Arguments
/// * `today` - current local date
/// * `weekday` - day of week the commute is planned for
/// * `windows` - named start/end hours, validated at load time
/// * `tz` - time zone of the destination
pub fn generate_time_slots(
    today: &NaiveDate,
    weekday: Weekday,
    windows: &[TimeWindowConfig],
    tz: Tz,
) -> Result<Vec<TimeSlot>, CommuteError> {
    let day = next_occurrence(today, weekday);
    log::debug!("generating {} time slots for {day}", windows.len());
    windows
        .iter()
        .map(|window| {
            let start = zoned_hour(&day, window.start_hour, tz, window)?;
            let end = zoned_hour(&day, window.end_hour, tz, window)?;
            Ok(TimeSlot {
                name: window.name.clone(),
                start,
                end,
            })
        })
        .collect()
}

fn zoned_hour(
    day: &NaiveDate,
    hour: u32,
    tz: Tz,
    window: &TimeWindowConfig,
) -> Result<chrono::DateTime<Tz>, CommuteError> {
    let invalid = |message: String| CommuteError::InvalidTimeWindow {
        name: window.name.clone(),
        message,
    };
    let local = day
        .and_hms_opt(hour, 0, 0)
        .ok_or_else(|| invalid(format!("hour {hour} is not a valid time of day")))?;
    // a wall clock hour skipped by a daylight saving transition has no instant
    tz.from_local_datetime(&local)
        .earliest()
        .ok_or_else(|| invalid(format!("{local} does not exist in time zone {tz}")))
}

#[cfg(test)]
mod tests {
    use super::{generate_time_slots, next_occurrence, weekday_from_index};
    use crate::config::TimeWindowConfig;
    use chrono::{Datelike, NaiveDate, Timelike, Weekday};
    use chrono_tz::America::New_York;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test invariant failed: invalid date")
    }

    #[test]
    fn test_next_occurrence_is_strictly_after_today() {
        // 2024-01-01 is a Monday
        let start = date(2024, 1, 1);
        for offset in 0..14 {
            let today = start + chrono::TimeDelta::days(offset);
            for idx in 0..7 {
                let weekday = weekday_from_index(idx).unwrap();
                let next = next_occurrence(&today, weekday);
                let diff = (next - today).num_days();
                assert_eq!(next.weekday(), weekday);
                assert!((1..=7).contains(&diff), "diff of {diff} days from {today}");
            }
        }
    }

    #[test]
    fn test_next_occurrence_same_weekday_skips_a_week() {
        let monday = date(2024, 1, 1);
        assert_eq!(next_occurrence(&monday, Weekday::Mon), date(2024, 1, 8));
        assert_eq!(next_occurrence(&monday, Weekday::Tue), date(2024, 1, 2));
        assert_eq!(next_occurrence(&monday, Weekday::Sun), date(2024, 1, 7));
    }

    #[test]
    fn test_weekday_from_index() {
        assert_eq!(weekday_from_index(0).unwrap(), Weekday::Mon);
        assert_eq!(weekday_from_index(6).unwrap(), Weekday::Sun);
        assert!(weekday_from_index(7).is_err());
    }

    #[test]
    fn test_generate_time_slots_order_and_zone() {
        let windows = vec![
            TimeWindowConfig::new("8_5", 8, 17),
            TimeWindowConfig::new("6_3", 6, 15),
        ];
        let today = date(2024, 1, 3); // Wednesday
        let slots = generate_time_slots(&today, Weekday::Fri, &windows, New_York).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].name, "8_5");
        assert_eq!(slots[1].name, "6_3");
        assert_eq!(slots[0].start.date_naive(), date(2024, 1, 5));
        assert_eq!(slots[0].start.hour(), 8);
        assert_eq!(slots[0].end.hour(), 17);
        // EST is UTC-5 in January
        assert_eq!(slots[0].start_epoch(), 1704459600);
        assert_eq!(slots[0].end_epoch() - slots[0].start_epoch(), 9 * 3600);
    }

    #[test]
    fn test_skipped_hour_is_an_error() {
        // clocks in New York jump from 02:00 to 03:00 on 2024-03-10, a Sunday
        let windows = vec![TimeWindowConfig::new("night", 2, 10)];
        let today = date(2024, 3, 8);
        let result = generate_time_slots(&today, Weekday::Sun, &windows, New_York);
        assert!(result.is_err());
    }
}
