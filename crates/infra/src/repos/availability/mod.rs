mod inmemory;
mod mongo;

pub use inmemory::InMemoryAvailabilityRepo;
pub use mongo::MongoAvailabilityRepo;
use wrench_domain::{Day, DayAvailability, SlotTime};

#[async_trait::async_trait]
pub trait IAvailabilityRepo: Send + Sync {
    async fn find(&self, day: &Day) -> Option<DayAvailability>;
    /// Creates the record for the day or overwrites the stored one
    async fn upsert(&self, availability: &DayAvailability) -> anyhow::Result<()>;
    /// Sets a single slot's flag. `Ok(false)` when no slot matched the
    /// time, in which case nothing was changed.
    async fn set_slot_available(
        &self,
        day: &Day,
        time: SlotTime,
        available: bool,
    ) -> anyhow::Result<bool>;
    /// Conditionally takes a slot for a booking: flips `available` to
    /// false only if the day exists, is not blocked and the slot is still
    /// available. `Ok(true)` means this caller won the slot; `Ok(false)`
    /// covers unknown day, blocked day, unknown slot and lost races
    /// alike. This is the single compare-and-swap every booking races
    /// through.
    async fn book_slot(&self, day: &Day, time: SlotTime) -> anyhow::Result<bool>;
}
