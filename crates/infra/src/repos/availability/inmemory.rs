use super::IAvailabilityRepo;
use std::sync::Mutex;
use wrench_domain::{Day, DayAvailability, SlotTime};

pub struct InMemoryAvailabilityRepo {
    days: Mutex<Vec<DayAvailability>>,
}

impl InMemoryAvailabilityRepo {
    pub fn new() -> Self {
        Self {
            days: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IAvailabilityRepo for InMemoryAvailabilityRepo {
    async fn find(&self, day: &Day) -> Option<DayAvailability> {
        let days = self.days.lock().unwrap();
        days.iter().find(|a| a.day == *day).cloned()
    }

    async fn upsert(&self, availability: &DayAvailability) -> anyhow::Result<()> {
        let mut days = self.days.lock().unwrap();
        match days.iter_mut().find(|a| a.day == availability.day) {
            Some(existing) => *existing = availability.clone(),
            None => days.push(availability.clone()),
        }
        Ok(())
    }

    async fn set_slot_available(
        &self,
        day: &Day,
        time: SlotTime,
        available: bool,
    ) -> anyhow::Result<bool> {
        let mut days = self.days.lock().unwrap();
        match days.iter_mut().find(|a| a.day == *day) {
            Some(record) => Ok(record.set_slot(time, available)),
            None => Ok(false),
        }
    }

    async fn book_slot(&self, day: &Day, time: SlotTime) -> anyhow::Result<bool> {
        // Check and flip under a single lock guard, mirroring the
        // conditional update the mongo implementation races through
        let mut days = self.days.lock().unwrap();
        let record = match days.iter_mut().find(|a| a.day == *day) {
            Some(record) => record,
            None => return Ok(false),
        };
        if record.is_blocked {
            return Ok(false);
        }
        match record
            .time_slots
            .iter_mut()
            .find(|s| s.time == time && s.available)
        {
            Some(slot) => {
                slot.available = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wrench_domain::{generate_slots, WorkingHours};

    fn stored_day(day: &str, is_blocked: bool) -> DayAvailability {
        let mut availability = DayAvailability::default_for(day.parse().unwrap());
        availability.is_blocked = is_blocked;
        availability.time_slots = generate_slots(&WorkingHours::default());
        availability
    }

    #[tokio::test]
    async fn books_a_slot_exactly_once() {
        let repo = InMemoryAvailabilityRepo::new();
        let day = "2025-03-10".parse().unwrap();
        repo.upsert(&stored_day("2025-03-10", false)).await.unwrap();

        let time = "09:00".parse().unwrap();
        assert!(repo.book_slot(&day, time).await.unwrap());
        // second taker loses
        assert!(!repo.book_slot(&day, time).await.unwrap());
    }

    #[tokio::test]
    async fn does_not_book_on_blocked_day() {
        let repo = InMemoryAvailabilityRepo::new();
        let day = "2025-03-10".parse().unwrap();
        repo.upsert(&stored_day("2025-03-10", true)).await.unwrap();

        assert!(!repo.book_slot(&day, "09:00".parse().unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn does_not_book_unknown_day_or_slot() {
        let repo = InMemoryAvailabilityRepo::new();
        let day = "2025-03-10".parse().unwrap();
        assert!(!repo.book_slot(&day, "09:00".parse().unwrap()).await.unwrap());

        repo.upsert(&stored_day("2025-03-10", false)).await.unwrap();
        // 09:10 is not on the slot grid
        assert!(!repo.book_slot(&day, "09:10".parse().unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn set_slot_available_reports_unmatched_time() {
        let repo = InMemoryAvailabilityRepo::new();
        let day = "2025-03-10".parse().unwrap();
        repo.upsert(&stored_day("2025-03-10", false)).await.unwrap();

        assert!(repo
            .set_slot_available(&day, "09:30".parse().unwrap(), false)
            .await
            .unwrap());
        assert!(!repo
            .set_slot_available(&day, "09:10".parse().unwrap(), false)
            .await
            .unwrap());

        let stored = repo.find(&day).await.unwrap();
        let flipped = stored.slot("09:30".parse().unwrap()).unwrap();
        assert!(!flipped.available);
    }
}
