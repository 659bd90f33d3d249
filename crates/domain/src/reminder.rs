use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderType {
    Time,
    Mileage,
    Both,
}

/// A `Reminder` notifies a customer by email about an upcoming or due
/// service for one of their vehicles.
#[derive(Debug, Clone)]
pub struct Reminder {
    pub id: ID,
    pub service_id: ID,
    pub vehicle_id: ID,
    pub customer_id: ID,
    pub reminder_type: ReminderType,
    /// Due timestamp in millis, present for time and both reminders
    pub remind_at: Option<i64>,
    /// Odometer threshold, present for mileage and both reminders
    pub mileage_threshold: Option<i64>,
    pub message: String,
    pub email: String,
    /// Monotonic under the sweep: flips false -> true on delivery and is
    /// only reset by an explicit edit.
    pub sent: bool,
    pub created: i64,
    pub updated: i64,
}

impl Reminder {
    /// Whether the bulk sweep should pick this reminder up. Mileage-only
    /// reminders are never swept; they surface on vehicle reads.
    pub fn is_due(&self, now: i64) -> bool {
        if self.sent {
            return false;
        }
        match self.reminder_type {
            ReminderType::Mileage => false,
            ReminderType::Time | ReminderType::Both => {
                matches!(self.remind_at, Some(at) if at <= now)
            }
        }
    }
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn reminder(reminder_type: ReminderType, remind_at: Option<i64>, sent: bool) -> Reminder {
        Reminder {
            id: Default::default(),
            service_id: Default::default(),
            vehicle_id: Default::default(),
            customer_id: Default::default(),
            reminder_type,
            remind_at,
            mileage_threshold: None,
            message: "Service due".into(),
            email: "customer@example.com".into(),
            sent,
            created: 0,
            updated: 0,
        }
    }

    #[test]
    fn time_reminder_is_due_once_timestamp_passed() {
        let r = reminder(ReminderType::Time, Some(100), false);
        assert!(!r.is_due(99));
        assert!(r.is_due(100));
        assert!(r.is_due(101));
    }

    #[test]
    fn sent_reminder_is_never_due() {
        let r = reminder(ReminderType::Time, Some(100), true);
        assert!(!r.is_due(200));
    }

    #[test]
    fn mileage_reminder_is_not_swept() {
        let r = reminder(ReminderType::Mileage, Some(100), false);
        assert!(!r.is_due(200));
    }

    #[test]
    fn both_reminder_uses_its_timestamp() {
        let r = reminder(ReminderType::Both, Some(100), false);
        assert!(r.is_due(150));
        let r = reminder(ReminderType::Both, None, false);
        assert!(!r.is_due(150));
    }
}
