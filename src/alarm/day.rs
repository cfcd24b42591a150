use std::fmt;
use std::str::FromStr;

use chrono::Weekday;

use crate::alarm::AlarmError;

/// Day of the week an alarm can be active on.
///
/// Declaration order is the canonical Sunday-first order. Iteration, the
/// serialized day map and every on-screen day row follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// Zero-based position in the Sunday-first week.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Day::Sunday => "Sunday",
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
        }
    }

    /// Lowercase key used in the serialized day map.
    pub const fn key(self) -> &'static str {
        match self {
            Day::Sunday => "sunday",
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }

    pub fn initial(self) -> char {
        self.abbreviation().chars().next().unwrap_or('?')
    }

    /// Accepts a full day name or its three-letter abbreviation, in any case.
    pub fn from_label(input: &str) -> Result<Self, AlarmError> {
        let wanted = input.trim();
        Day::ALL
            .into_iter()
            .find(|day| {
                wanted.eq_ignore_ascii_case(day.name())
                    || wanted.eq_ignore_ascii_case(day.abbreviation())
            })
            .ok_or_else(|| AlarmError::UnknownDayKey(input.to_string()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parse of a serialized day key; only the lowercase full name matches.
impl FromStr for Day {
    type Err = AlarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .into_iter()
            .find(|day| day.key() == s)
            .ok_or_else(|| AlarmError::UnknownDayKey(s.to_string()))
    }
}

impl From<Weekday> for Day {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Sun => Day::Sunday,
            Weekday::Mon => Day::Monday,
            Weekday::Tue => Day::Tuesday,
            Weekday::Wed => Day::Wednesday,
            Weekday::Thu => Day::Thursday,
            Weekday::Fri => Day::Friday,
            Weekday::Sat => Day::Saturday,
        }
    }
}

impl From<Day> for Weekday {
    fn from(value: Day) -> Self {
        match value {
            Day::Sunday => Weekday::Sun,
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
        }
    }
}
