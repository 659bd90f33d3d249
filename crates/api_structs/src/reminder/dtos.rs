use serde::{Deserialize, Serialize};
use wrench_domain::{Reminder, ReminderType, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub service_id: ID,
    pub vehicle_id: ID,
    pub customer_id: ID,
    pub reminder_type: ReminderType,
    pub remind_at: Option<i64>,
    pub mileage_threshold: Option<i64>,
    pub message: String,
    pub email: String,
    pub sent: bool,
    pub created: i64,
    pub updated: i64,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id,
            service_id: reminder.service_id,
            vehicle_id: reminder.vehicle_id,
            customer_id: reminder.customer_id,
            reminder_type: reminder.reminder_type,
            remind_at: reminder.remind_at,
            mileage_threshold: reminder.mileage_threshold,
            message: reminder.message,
            email: reminder.email,
            sent: reminder.sent,
            created: reminder.created,
            updated: reminder.updated,
        }
    }
}
