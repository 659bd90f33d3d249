use crate::error::WrenchError;
use wrench_domain::{Day, SlotTime, ID};

pub struct Guard {}

impl Guard {
    pub fn against_malformed_id(val: String) -> Result<ID, WrenchError> {
        val.parse()
            .map_err(|e| WrenchError::BadClientData(format!("{}", e)))
    }

    pub fn against_malformed_date(val: &str) -> Result<Day, WrenchError> {
        val.parse()
            .map_err(|e| WrenchError::BadClientData(format!("{}", e)))
    }

    pub fn against_malformed_time(val: &str) -> Result<SlotTime, WrenchError> {
        val.parse()
            .map_err(|e| WrenchError::BadClientData(format!("{}", e)))
    }

    pub fn against_empty(val: &str, field: &str) -> Result<String, WrenchError> {
        let trimmed = val.trim();
        if trimmed.is_empty() {
            return Err(WrenchError::BadClientData(format!(
                "Field {} must not be empty",
                field
            )));
        }
        Ok(trimmed.to_string())
    }
}
