use chrono::{DateTime, FixedOffset, TimeZone};
use serde::{de::Visitor, Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// A calendar day without a time component, the key under which
/// a day's availability is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Error, Debug)]
pub enum InvalidDayError {
    #[error("Date: {0} is malformed, expected year-month-day")]
    Malformed(String),
}

impl Day {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, InvalidDayError> {
        if !(1970..=2100).contains(&year) || month < 1 || month > 12 {
            return Err(InvalidDayError::Malformed(format!(
                "{}-{}-{}",
                year, month, day
            )));
        }
        if day < 1 || day > get_month_length(year, month) {
            return Err(InvalidDayError::Malformed(format!(
                "{}-{}-{}",
                year, month, day
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Combines this day with a wall-clock time in the given fixed
    /// offset and returns the absolute timestamp in millis.
    pub fn timestamp_millis_at(&self, time: SlotTime, offset: &FixedOffset) -> Option<i64> {
        offset
            .with_ymd_and_hms(self.year, self.month, self.day, time.hours(), time.minutes(), 0)
            .single()
            .map(|dt: DateTime<FixedOffset>| dt.timestamp_millis())
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Day {
    type Err = InvalidDayError;

    fn from_str(datestr: &str) -> Result<Self, Self::Err> {
        let parts = datestr.split('-').collect::<Vec<_>>();
        if parts.len() != 3 {
            return Err(InvalidDayError::Malformed(datestr.to_string()));
        }
        let year = parts[0].parse();
        let month = parts[1].parse();
        let day = parts[2].parse();
        match (year, month, day) {
            (Ok(year), Ok(month), Ok(day)) => Self::new(year, month, day),
            _ => Err(InvalidDayError::Malformed(datestr.to_string())),
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month - 1 {
        0 => 31,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        2 => 31,
        3 => 30,
        4 => 31,
        5 => 30,
        6 => 31,
        7 => 31,
        8 => 30,
        9 => 31,
        10 => 30,
        11 => 31,
        _ => panic!("Invalid month"),
    }
}

/// A wall-clock time of day with minute resolution, identifying a
/// bookable slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotTime(u32);

#[derive(Error, Debug)]
pub enum InvalidSlotTimeError {
    #[error("Time: {0} is malformed, expected hours:minutes")]
    Malformed(String),
}

impl SlotTime {
    pub fn new(hours: u32, minutes: u32) -> Result<Self, InvalidSlotTimeError> {
        if hours > 23 || minutes > 59 {
            return Err(InvalidSlotTimeError::Malformed(format!(
                "{}:{}",
                hours, minutes
            )));
        }
        Ok(Self(hours * 60 + minutes))
    }

    pub fn from_minutes_of_day(minutes: u32) -> Option<Self> {
        if minutes >= 24 * 60 {
            return None;
        }
        Some(Self(minutes))
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.0
    }

    pub fn hours(&self) -> u32 {
        self.0 / 60
    }

    pub fn minutes(&self) -> u32 {
        self.0 % 60
    }
}

impl Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl FromStr for SlotTime {
    type Err = InvalidSlotTimeError;

    fn from_str(timestr: &str) -> Result<Self, Self::Err> {
        let parts = timestr.split(':').collect::<Vec<_>>();
        if parts.len() != 2 {
            return Err(InvalidSlotTimeError::Malformed(timestr.to_string()));
        }
        match (parts[0].parse(), parts[1].parse()) {
            (Ok(hours), Ok(minutes)) => Self::new(hours, minutes),
            _ => Err(InvalidSlotTimeError::Malformed(timestr.to_string())),
        }
    }
}

macro_rules! string_serde {
    ($t:ty, $visitor:ident, $expecting:expr) => {
        impl Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                struct $visitor;

                impl<'de> Visitor<'de> for $visitor {
                    type Value = $t;

                    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                        formatter.write_str($expecting)
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$t, E>
                    where
                        E: serde::de::Error,
                    {
                        value
                            .parse::<$t>()
                            .map_err(|e| E::custom(format!("{}", e)))
                    }
                }

                deserializer.deserialize_str($visitor)
            }
        }
    };
}

string_serde!(Day, DayVisitor, "A year-month-day calendar date");
string_serde!(SlotTime, SlotTimeVisitor, "A hours:minutes time of day");

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2020-2-09",
        ];

        for date in &valid_dates {
            assert!(date.parse::<Day>().is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2020-0-1",
            "2020-1-0",
            "1969-1-1",
            "2020-13-1",
            "not-a-date",
        ];

        for date in &invalid_dates {
            assert!(date.parse::<Day>().is_err());
        }
    }

    #[test]
    fn day_display_is_zero_padded() {
        let day = "2025-3-7".parse::<Day>().unwrap();
        assert_eq!(day.to_string(), "2025-03-07");
    }

    #[test]
    fn it_accepts_valid_times() {
        for time in &["00:00", "9:00", "09:30", "23:59"] {
            assert!(time.parse::<SlotTime>().is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_times() {
        for time in &["24:00", "12:60", "12", "12:00:00", "ab:cd", ""] {
            assert!(time.parse::<SlotTime>().is_err());
        }
    }

    #[test]
    fn slot_times_order_by_minutes_of_day() {
        let earlier = "09:00".parse::<SlotTime>().unwrap();
        let later = "09:30".parse::<SlotTime>().unwrap();
        assert!(earlier < later);
        assert_eq!(later.minutes_of_day() - earlier.minutes_of_day(), 30);
    }

    #[test]
    fn combines_day_and_time_in_fixed_offset() {
        let day = "2025-03-10".parse::<Day>().unwrap();
        let time = "09:00".parse::<SlotTime>().unwrap();
        let utc = FixedOffset::east_opt(0).unwrap();
        let plus_one = FixedOffset::east_opt(3600).unwrap();

        let ts_utc = day.timestamp_millis_at(time, &utc).unwrap();
        let ts_plus_one = day.timestamp_millis_at(time, &plus_one).unwrap();
        assert_eq!(ts_utc - ts_plus_one, 3600 * 1000);
    }
}
