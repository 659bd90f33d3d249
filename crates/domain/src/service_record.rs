use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Scheduled => "scheduled",
            ServiceStatus::InProgress => "in-progress",
            ServiceStatus::Completed => "completed",
            ServiceStatus::Cancelled => "cancelled",
        }
    }
}

/// A unit of workshop work booked against a `Vehicle`, either scheduled
/// into an availability slot or entered manually by a worker.
#[derive(Debug, Clone)]
pub struct ServiceRecord {
    pub id: ID,
    pub vehicle_id: ID,
    pub service_type: String,
    /// Absolute timestamp in millis: the slot's day and time combined in
    /// the workshop's fixed UTC offset.
    pub service_date: i64,
    pub status: ServiceStatus,
    pub mileage: Option<i64>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub technician_id: Option<ID>,
    /// Requester contact captured at booking time. Deliberately not kept
    /// in sync with later customer edits.
    pub customer_name: String,
    pub customer_email: String,
    pub created: i64,
    pub updated: i64,
}

impl Entity for ServiceRecord {
    fn id(&self) -> &ID {
        &self.id
    }
}
