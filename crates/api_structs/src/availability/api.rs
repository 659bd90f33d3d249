use crate::dtos::{AvailabilityDTO, TimeSlotDTO, WorkingHoursDTO};
use serde::{Deserialize, Serialize};
use wrench_domain::DayAvailability;

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    pub availability: AvailabilityDTO,
}

impl AvailabilityResponse {
    pub fn new(availability: DayAvailability) -> Self {
        Self {
            availability: AvailabilityDTO::new(availability),
        }
    }
}

pub mod get_availability {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub date: String,
    }

    pub type APIResponse = AvailabilityResponse;
}

pub mod set_availability {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub date: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub is_blocked: bool,
        pub working_hours: WorkingHoursDTO,
        /// Omitted slots are generated from the working hours
        pub time_slots: Option<Vec<TimeSlotDTO>>,
    }

    pub type APIResponse = AvailabilityResponse;
}

pub mod set_slot_availability {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub date: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub time: String,
        pub available: bool,
    }

    pub type APIResponse = AvailabilityResponse;
}
