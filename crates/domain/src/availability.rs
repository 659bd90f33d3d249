use crate::date::{Day, SlotTime};
use crate::shared::entity::ID;
use serde::{Deserialize, Serialize};

/// The bookable hours of a day: slots are generated from `start` up to
/// but not including `end`, stepped by `interval_minutes`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub start: SlotTime,
    pub end: SlotTime,
    pub interval_minutes: u32,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: SlotTime::new(9, 0).unwrap(),
            end: SlotTime::new(17, 0).unwrap(),
            interval_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: SlotTime,
    pub available: bool,
}

/// Per-day booking configuration. Created lazily on the first write for a
/// day and never deleted.
#[derive(Debug, Clone)]
pub struct DayAvailability {
    pub day: Day,
    /// When set the whole day is closed for booking regardless of the
    /// individual slot flags.
    pub is_blocked: bool,
    pub working_hours: WorkingHours,
    pub time_slots: Vec<TimeSlot>,
    pub updated: i64,
    pub updated_by: Option<ID>,
}

impl DayAvailability {
    /// The record reported for a day nothing has been stored for yet:
    /// open, default working hours, no slots.
    pub fn default_for(day: Day) -> Self {
        Self {
            day,
            is_blocked: false,
            working_hours: Default::default(),
            time_slots: Vec::new(),
            updated: 0,
            updated_by: None,
        }
    }

    pub fn slot(&self, time: SlotTime) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|s| s.time == time)
    }

    /// Flips the matching slot and reports whether a slot matched. An
    /// unmatched time leaves the slot list untouched.
    pub fn set_slot(&mut self, time: SlotTime, available: bool) -> bool {
        match self.time_slots.iter_mut().find(|s| s.time == time) {
            Some(slot) => {
                slot.available = available;
                true
            }
            None => false,
        }
    }
}

/// Slot times must be strictly increasing, which also makes them unique.
pub fn slots_strictly_increasing(slots: &[TimeSlot]) -> bool {
    slots.windows(2).all(|w| w[0].time < w[1].time)
}

/// Generates the slot sequence for the given working hours. The end is
/// exclusive: the last slot starts strictly before `end`, and no partial
/// slot is emitted beyond it. `start >= end` or a zero interval yields an
/// empty sequence.
pub fn generate_slots(hours: &WorkingHours) -> Vec<TimeSlot> {
    let mut slots = Vec::new();
    if hours.interval_minutes < 1 {
        return slots;
    }

    let end = hours.end.minutes_of_day();
    let mut cursor = hours.start.minutes_of_day();
    while cursor < end {
        // cursor < end < 24h, so this cannot overflow the day
        let time = match SlotTime::from_minutes_of_day(cursor) {
            Some(time) => time,
            None => break,
        };
        slots.push(TimeSlot {
            time,
            available: true,
        });
        cursor += hours.interval_minutes;
    }

    slots
}

#[cfg(test)]
mod test {
    use super::*;

    fn hours(start: &str, end: &str, interval_minutes: u32) -> WorkingHours {
        WorkingHours {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
            interval_minutes,
        }
    }

    #[test]
    fn generates_slots_for_evenly_divisible_hours() {
        let slots = generate_slots(&hours("09:00", "17:00", 30));
        assert_eq!(slots.len(), 16);
        assert_eq!(slots[0].time.to_string(), "09:00");
        assert_eq!(slots[1].time.to_string(), "09:30");
        assert_eq!(slots[15].time.to_string(), "16:30");
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn generates_slots_for_non_divisible_interval() {
        // 09:00-10:00 stepped by 45 minutes: 09:00 and 09:45, nothing at 10:30
        let slots = generate_slots(&hours("09:00", "10:00", 45));
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].time.to_string(), "09:00");
        assert_eq!(slots[1].time.to_string(), "09:45");
    }

    #[test]
    fn last_slot_is_strictly_before_end() {
        let slots = generate_slots(&hours("09:00", "10:00", 30));
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.last().unwrap().time.to_string(), "09:30");

        for hours in &[
            hours("09:00", "17:00", 30),
            hours("08:15", "11:05", 25),
            hours("00:00", "23:59", 60),
        ] {
            let slots = generate_slots(hours);
            assert!(!slots.is_empty());
            assert!(slots.iter().all(|s| s.time < hours.end));
            assert!(slots_strictly_increasing(&slots));
        }
    }

    #[test]
    fn start_at_or_after_end_yields_no_slots() {
        assert!(generate_slots(&hours("17:00", "09:00", 30)).is_empty());
        assert!(generate_slots(&hours("09:00", "09:00", 30)).is_empty());
    }

    #[test]
    fn zero_interval_yields_no_slots() {
        assert!(generate_slots(&hours("09:00", "17:00", 0)).is_empty());
    }

    #[test]
    fn slot_count_matches_exclusive_end_rule() {
        // ceil((end - start) / interval) for both divisible and not
        let cases = vec![
            ("09:00", "17:00", 30, 16),
            ("09:00", "17:00", 60, 8),
            ("09:00", "10:00", 45, 2),
            ("09:00", "09:01", 30, 1),
        ];
        for (start, end, interval, expected) in cases {
            assert_eq!(
                generate_slots(&hours(start, end, interval)).len(),
                expected,
                "{}-{} by {}",
                start,
                end,
                interval
            );
        }
    }

    #[test]
    fn set_slot_flips_only_the_matching_slot() {
        let day = "2025-03-10".parse().unwrap();
        let mut availability = DayAvailability::default_for(day);
        availability.time_slots = generate_slots(&WorkingHours::default());

        let target = "09:30".parse().unwrap();
        assert!(availability.set_slot(target, false));
        assert!(!availability.slot(target).unwrap().available);
        let others_untouched = availability
            .time_slots
            .iter()
            .filter(|s| s.time != target)
            .all(|s| s.available);
        assert!(others_untouched);
    }

    #[test]
    fn set_slot_with_unmatched_time_is_a_noop() {
        let day = "2025-03-10".parse().unwrap();
        let mut availability = DayAvailability::default_for(day);
        availability.time_slots = generate_slots(&WorkingHours::default());
        let before = availability.time_slots.clone();

        // 09:10 is not on the 30 minute grid
        assert!(!availability.set_slot("09:10".parse().unwrap(), true));
        assert_eq!(availability.time_slots, before);
    }

    #[test]
    fn validates_slot_ordering() {
        let increasing = generate_slots(&WorkingHours::default());
        assert!(slots_strictly_increasing(&increasing));

        let mut duplicated = increasing.clone();
        duplicated.push(*duplicated.last().unwrap());
        assert!(!slots_strictly_increasing(&duplicated));

        let mut unordered = increasing;
        unordered.swap(0, 1);
        assert!(!slots_strictly_increasing(&unordered));
    }
}
