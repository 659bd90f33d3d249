use super::IReminderRepo;
use crate::repos::shared::mongo_repo;
use crate::repos::shared::repo::DeleteResult;
use mongo_repo::MongoDocument;
use mongodb::{
    bson::doc,
    bson::{oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use wrench_domain::{Reminder, ReminderType, ID};

pub struct MongoReminderRepo {
    collection: Collection<Document>,
}

impl MongoReminderRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("service-reminders"),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for MongoReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn save(&self, reminder: &Reminder) -> anyhow::Result<()> {
        mongo_repo::save::<_, ReminderMongo>(&self.collection, reminder).await
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        let oid = reminder_id.inner_ref();
        mongo_repo::find::<_, ReminderMongo>(&self.collection, oid).await
    }

    async fn find_by_service(&self, service_id: &ID) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "service_id": service_id.inner_ref()
        };
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, filter).await
    }

    async fn find_due(&self, now: i64) -> anyhow::Result<Vec<Reminder>> {
        let filter = doc! {
            "sent": false,
            "reminder_type": { "$in": ["time", "both"] },
            "remind_at": { "$lte": now }
        };
        mongo_repo::find_many_by::<_, ReminderMongo>(&self.collection, filter).await
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        let oid = reminder_id.inner_ref();
        mongo_repo::delete::<_, ReminderMongo>(&self.collection, oid).await
    }

    async fn delete_by_service(&self, service_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "service_id": service_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }

    async fn delete_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "vehicle_id": vehicle_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }

    async fn delete_by_customer(&self, customer_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "customer_id": customer_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ReminderMongo {
    _id: ObjectId,
    service_id: ObjectId,
    vehicle_id: ObjectId,
    customer_id: ObjectId,
    reminder_type: ReminderType,
    remind_at: Option<i64>,
    mileage_threshold: Option<i64>,
    message: String,
    email: String,
    sent: bool,
    created: i64,
    updated: i64,
}

impl MongoDocument<Reminder> for ReminderMongo {
    fn to_domain(self) -> Reminder {
        Reminder {
            id: ID::from(self._id),
            service_id: ID::from(self.service_id),
            vehicle_id: ID::from(self.vehicle_id),
            customer_id: ID::from(self.customer_id),
            reminder_type: self.reminder_type,
            remind_at: self.remind_at,
            mileage_threshold: self.mileage_threshold,
            message: self.message,
            email: self.email,
            sent: self.sent,
            created: self.created,
            updated: self.updated,
        }
    }

    fn from_domain(reminder: &Reminder) -> Self {
        Self {
            _id: *reminder.id.inner_ref(),
            service_id: *reminder.service_id.inner_ref(),
            vehicle_id: *reminder.vehicle_id.inner_ref(),
            customer_id: *reminder.customer_id.inner_ref(),
            reminder_type: reminder.reminder_type,
            remind_at: reminder.remind_at,
            mileage_threshold: reminder.mileage_threshold,
            message: reminder.message.clone(),
            email: reminder.email.clone(),
            sent: reminder.sent,
            created: reminder.created,
            updated: reminder.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
