use serde::{Deserialize, Serialize};
use wrench_domain::{DayAvailability, TimeSlot, WorkingHours};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursDTO {
    pub start: String,
    pub end: String,
    pub interval: u32,
}

impl WorkingHoursDTO {
    pub fn new(hours: &WorkingHours) -> Self {
        Self {
            start: hours.start.to_string(),
            end: hours.end.to_string(),
            interval: hours.interval_minutes,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotDTO {
    pub time: String,
    pub available: bool,
}

impl TimeSlotDTO {
    pub fn new(slot: &TimeSlot) -> Self {
        Self {
            time: slot.time.to_string(),
            available: slot.available,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDTO {
    pub date: String,
    pub is_blocked: bool,
    pub working_hours: WorkingHoursDTO,
    pub time_slots: Vec<TimeSlotDTO>,
}

impl AvailabilityDTO {
    pub fn new(availability: DayAvailability) -> Self {
        Self {
            date: availability.day.to_string(),
            is_blocked: availability.is_blocked,
            working_hours: WorkingHoursDTO::new(&availability.working_hours),
            time_slots: availability.time_slots.iter().map(TimeSlotDTO::new).collect(),
        }
    }
}
