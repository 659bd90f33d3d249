mod inmemory;
mod mongo;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryReminderRepo;
pub use mongo::MongoReminderRepo;
use wrench_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_service(&self, service_id: &ID) -> anyhow::Result<Vec<Reminder>>;
    /// Unsent time-based (and both) reminders due at or before `now`.
    /// Mileage-only reminders are never returned by this query.
    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn delete_by_service(&self, service_id: &ID) -> anyhow::Result<DeleteResult>;
    async fn delete_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<DeleteResult>;
    async fn delete_by_customer(&self, customer_id: &ID) -> anyhow::Result<DeleteResult>;
}
