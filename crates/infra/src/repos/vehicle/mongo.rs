use super::IVehicleRepo;
use crate::repos::shared::mongo_repo;
use crate::repos::shared::repo::DeleteResult;
use mongo_repo::MongoDocument;
use mongodb::{
    bson::doc,
    bson::{oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use wrench_domain::{Vehicle, ID};

pub struct MongoVehicleRepo {
    collection: Collection<Document>,
}

impl MongoVehicleRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("vehicles"),
        }
    }
}

#[async_trait::async_trait]
impl IVehicleRepo for MongoVehicleRepo {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        mongo_repo::insert::<_, VehicleMongo>(&self.collection, vehicle).await
    }

    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()> {
        mongo_repo::save::<_, VehicleMongo>(&self.collection, vehicle).await
    }

    async fn find(&self, vehicle_id: &ID) -> Option<Vehicle> {
        let oid = vehicle_id.inner_ref();
        mongo_repo::find::<_, VehicleMongo>(&self.collection, oid).await
    }

    async fn find_by_customer(&self, customer_id: &ID) -> anyhow::Result<Vec<Vehicle>> {
        let filter = doc! {
            "customer_id": customer_id.inner_ref()
        };
        mongo_repo::find_many_by::<_, VehicleMongo>(&self.collection, filter).await
    }

    async fn delete(&self, vehicle_id: &ID) -> Option<Vehicle> {
        let oid = vehicle_id.inner_ref();
        mongo_repo::delete::<_, VehicleMongo>(&self.collection, oid).await
    }

    async fn delete_by_customer(&self, customer_id: &ID) -> anyhow::Result<DeleteResult> {
        let filter = doc! {
            "customer_id": customer_id.inner_ref()
        };
        mongo_repo::delete_many_by(&self.collection, filter).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct VehicleMongo {
    _id: ObjectId,
    customer_id: ObjectId,
    make: String,
    model: String,
    year: i32,
    license_plate: Option<String>,
    vin: Option<String>,
    mileage: Option<i64>,
    created: i64,
    updated: i64,
}

impl MongoDocument<Vehicle> for VehicleMongo {
    fn to_domain(self) -> Vehicle {
        Vehicle {
            id: ID::from(self._id),
            customer_id: ID::from(self.customer_id),
            make: self.make,
            model: self.model,
            year: self.year,
            license_plate: self.license_plate,
            vin: self.vin,
            mileage: self.mileage,
            created: self.created,
            updated: self.updated,
        }
    }

    fn from_domain(vehicle: &Vehicle) -> Self {
        Self {
            _id: *vehicle.id.inner_ref(),
            customer_id: *vehicle.customer_id.inner_ref(),
            make: vehicle.make.clone(),
            model: vehicle.model.clone(),
            year: vehicle.year,
            license_plate: vehicle.license_plate.clone(),
            vin: vehicle.vin.clone(),
            mileage: vehicle.mileage,
            created: vehicle.created,
            updated: vehicle.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
