use super::IAvailabilityRepo;
use crate::repos::shared::mongo_repo;
use mongo_repo::MongoDocument;
use mongodb::{
    bson::doc,
    bson::{oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use wrench_domain::{Day, DayAvailability, SlotTime, TimeSlot, WorkingHours, ID};

pub struct MongoAvailabilityRepo {
    collection: Collection<Document>,
}

impl MongoAvailabilityRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("day-availability"),
        }
    }
}

#[async_trait::async_trait]
impl IAvailabilityRepo for MongoAvailabilityRepo {
    async fn find(&self, day: &Day) -> Option<DayAvailability> {
        let filter = doc! {
            "_id": day.to_string()
        };
        mongo_repo::find_one_by::<_, DayAvailabilityMongo>(&self.collection, filter).await
    }

    async fn upsert(&self, availability: &DayAvailability) -> anyhow::Result<()> {
        mongo_repo::upsert::<_, DayAvailabilityMongo>(&self.collection, availability).await
    }

    async fn set_slot_available(
        &self,
        day: &Day,
        time: SlotTime,
        available: bool,
    ) -> anyhow::Result<bool> {
        let filter = doc! {
            "_id": day.to_string(),
            "time_slots.time": time.to_string()
        };
        let update = doc! {
            "$set": { "time_slots.$.available": available }
        };
        let res = self.collection.update_one(filter, update, None).await?;
        Ok(res.matched_count == 1)
    }

    async fn book_slot(&self, day: &Day, time: SlotTime) -> anyhow::Result<bool> {
        // The whole booking race resolves on this one conditional update:
        // only a document whose slot is still available can match, so at
        // most one concurrent caller observes modified_count == 1.
        let filter = doc! {
            "_id": day.to_string(),
            "is_blocked": false,
            "time_slots": {
                "$elemMatch": {
                    "time": time.to_string(),
                    "available": true
                }
            }
        };
        let update = doc! {
            "$set": { "time_slots.$.available": false }
        };
        let res = self.collection.update_one(filter, update, None).await?;
        Ok(res.modified_count == 1)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WorkingHoursMongo {
    start: SlotTime,
    end: SlotTime,
    interval_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct TimeSlotMongo {
    time: SlotTime,
    available: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct DayAvailabilityMongo {
    _id: Day,
    is_blocked: bool,
    working_hours: WorkingHoursMongo,
    time_slots: Vec<TimeSlotMongo>,
    updated: i64,
    updated_by: Option<ObjectId>,
}

impl MongoDocument<DayAvailability> for DayAvailabilityMongo {
    fn to_domain(self) -> DayAvailability {
        DayAvailability {
            day: self._id,
            is_blocked: self.is_blocked,
            working_hours: WorkingHours {
                start: self.working_hours.start,
                end: self.working_hours.end,
                interval_minutes: self.working_hours.interval_minutes as u32,
            },
            time_slots: self
                .time_slots
                .into_iter()
                .map(|s| TimeSlot {
                    time: s.time,
                    available: s.available,
                })
                .collect(),
            updated: self.updated,
            updated_by: self.updated_by.map(ID::from),
        }
    }

    fn from_domain(availability: &DayAvailability) -> Self {
        Self {
            _id: availability.day,
            is_blocked: availability.is_blocked,
            working_hours: WorkingHoursMongo {
                start: availability.working_hours.start,
                end: availability.working_hours.end,
                interval_minutes: availability.working_hours.interval_minutes as i64,
            },
            time_slots: availability
                .time_slots
                .iter()
                .map(|s| TimeSlotMongo {
                    time: s.time,
                    available: s.available,
                })
                .collect(),
            updated: availability.updated,
            updated_by: availability.updated_by.as_ref().map(|id| *id.inner_ref()),
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id.to_string()
        }
    }
}
