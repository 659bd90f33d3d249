use super::IServiceRecordRepo;
use crate::repos::shared::mongo_repo;
use crate::repos::shared::repo::DeleteResult;
use mongo_repo::MongoDocument;
use mongodb::{
    bson::doc,
    bson::{oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use wrench_domain::{ServiceRecord, ServiceStatus, ID};

pub struct MongoServiceRecordRepo {
    collection: Collection<Document>,
}

impl MongoServiceRecordRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("service-records"),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRecordRepo for MongoServiceRecordRepo {
    async fn insert(&self, record: &ServiceRecord) -> anyhow::Result<()> {
        mongo_repo::insert::<_, ServiceRecordMongo>(&self.collection, record).await
    }

    async fn save(&self, record: &ServiceRecord) -> anyhow::Result<()> {
        mongo_repo::save::<_, ServiceRecordMongo>(&self.collection, record).await
    }

    async fn find(&self, record_id: &ID) -> Option<ServiceRecord> {
        let oid = record_id.inner_ref();
        mongo_repo::find::<_, ServiceRecordMongo>(&self.collection, oid).await
    }

    async fn find_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<Vec<ServiceRecord>> {
        let filter = doc! {
            "vehicle_id": vehicle_id.inner_ref()
        };
        mongo_repo::find_many_by::<_, ServiceRecordMongo>(&self.collection, filter).await
    }

    async fn delete(&self, record_id: &ID) -> Option<ServiceRecord> {
        let oid = record_id.inner_ref();
        mongo_repo::delete::<_, ServiceRecordMongo>(&self.collection, oid).await
    }

    async fn delete_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "vehicle_id": vehicle_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ServiceRecordMongo {
    _id: ObjectId,
    vehicle_id: ObjectId,
    service_type: String,
    service_date: i64,
    status: ServiceStatus,
    mileage: Option<i64>,
    description: Option<String>,
    cost: Option<f64>,
    technician_id: Option<ObjectId>,
    customer_name: String,
    customer_email: String,
    created: i64,
    updated: i64,
}

impl MongoDocument<ServiceRecord> for ServiceRecordMongo {
    fn to_domain(self) -> ServiceRecord {
        ServiceRecord {
            id: ID::from(self._id),
            vehicle_id: ID::from(self.vehicle_id),
            service_type: self.service_type,
            service_date: self.service_date,
            status: self.status,
            mileage: self.mileage,
            description: self.description,
            cost: self.cost,
            technician_id: self.technician_id.map(ID::from),
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            created: self.created,
            updated: self.updated,
        }
    }

    fn from_domain(record: &ServiceRecord) -> Self {
        Self {
            _id: *record.id.inner_ref(),
            vehicle_id: *record.vehicle_id.inner_ref(),
            service_type: record.service_type.clone(),
            service_date: record.service_date,
            status: record.status,
            mileage: record.mileage,
            description: record.description.clone(),
            cost: record.cost,
            technician_id: record.technician_id.as_ref().map(|id| *id.inner_ref()),
            customer_name: record.customer_name.clone(),
            customer_email: record.customer_email.clone(),
            created: record.created,
            updated: record.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
