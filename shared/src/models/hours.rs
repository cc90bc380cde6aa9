//! Weekly opening hours and open/closed evaluation

use chrono::{Datelike, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// One row of a business's weekly hours table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    #[serde(with = "weekday_name")]
    pub day_of_week: Weekday,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl BusinessHours {
    /// Hours closing before they open run past midnight into the next day.
    pub fn spans_midnight(&self) -> bool {
        self.close_time < self.open_time
    }
}

/// Whether any entry of `hours` covers the local wall-clock instant `at`.
///
/// Bounds are inclusive. An overnight entry covers `open..24:00` on its own
/// day and `00:00..=close` on the following day.
pub fn is_open_at(hours: &[BusinessHours], at: NaiveDateTime) -> bool {
    let today = at.weekday();
    let yesterday = today.pred();
    let now = at.time();

    hours.iter().any(|h| {
        if h.day_of_week == today {
            if h.spans_midnight() {
                now >= h.open_time
            } else {
                h.open_time <= now && now <= h.close_time
            }
        } else {
            h.day_of_week == yesterday && h.spans_midnight() && now <= h.close_time
        }
    })
}

/// Full English day names ("Monday"), the form stored by the dataset.
mod weekday_name {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        let name = match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        };
        serializer.serialize_str(name)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        // TO_CHAR(..., 'Day') pads names to nine characters
        raw.trim()
            .parse::<Weekday>()
            .map_err(|_| D::Error::custom(format!("invalid day of week: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hours(day: Weekday, open: (u32, u32), close: (u32, u32)) -> BusinessHours {
        BusinessHours {
            day_of_week: day,
            open_time: NaiveTime::from_hms_opt(open.0, open.1, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(close.0, close.1, 0).unwrap(),
        }
    }

    // 2024-06-03 is a Monday
    fn monday_at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_open_within_same_day_hours() {
        let table = [hours(Weekday::Mon, (9, 0), (17, 0))];
        assert!(is_open_at(&table, monday_at(9, 0)));
        assert!(is_open_at(&table, monday_at(12, 30)));
        assert!(is_open_at(&table, monday_at(17, 0)));
        assert!(!is_open_at(&table, monday_at(8, 59)));
        assert!(!is_open_at(&table, monday_at(17, 1)));
    }

    #[test]
    fn test_other_days_do_not_count() {
        let table = [hours(Weekday::Tue, (0, 0), (23, 59))];
        assert!(!is_open_at(&table, monday_at(12, 0)));
    }

    #[test]
    fn test_overnight_hours() {
        // Sunday 18:00 -> Monday 02:00, Monday 18:00 -> Tuesday 02:00
        let table = [
            hours(Weekday::Sun, (18, 0), (2, 0)),
            hours(Weekday::Mon, (18, 0), (2, 0)),
        ];
        assert!(is_open_at(&table, monday_at(1, 30)));
        assert!(!is_open_at(&table, monday_at(3, 0)));
        assert!(!is_open_at(&table, monday_at(17, 59)));
        assert!(is_open_at(&table, monday_at(23, 0)));
    }

    #[test]
    fn test_empty_table_is_closed() {
        assert!(!is_open_at(&[], monday_at(12, 0)));
    }

    #[test]
    fn test_day_name_serde() {
        let h = hours(Weekday::Wed, (11, 0), (22, 0));
        let json = serde_json::to_value(h).unwrap();
        assert_eq!(json["day_of_week"], "Wednesday");
        assert_eq!(json["open_time"], "11:00:00");

        let padded: BusinessHours = serde_json::from_str(
            r#"{"day_of_week":"Friday   ","open_time":"10:00:00","close_time":"21:30:00"}"#,
        )
        .unwrap();
        assert_eq!(padded.day_of_week, Weekday::Fri);
        assert!(
            serde_json::from_str::<BusinessHours>(
                r#"{"day_of_week":"Someday","open_time":"10:00:00","close_time":"21:30:00"}"#
            )
            .is_err()
        );
    }
}
