mod availability;
mod customer;
mod reminder;
mod service_record;
mod shared;
mod vehicle;

use availability::{IAvailabilityRepo, InMemoryAvailabilityRepo, MongoAvailabilityRepo};
use customer::{ICustomerRepo, InMemoryCustomerRepo, MongoCustomerRepo};
use mongodb::{options::ClientOptions, Client};
use reminder::{IReminderRepo, InMemoryReminderRepo, MongoReminderRepo};
use service_record::{IServiceRecordRepo, InMemoryServiceRecordRepo, MongoServiceRecordRepo};
use std::sync::Arc;
use tracing::info;
use vehicle::{IVehicleRepo, InMemoryVehicleRepo, MongoVehicleRepo};

pub use shared::repo::DeleteResult;

#[derive(Clone)]
pub struct Repos {
    pub customer_repo: Arc<dyn ICustomerRepo>,
    pub vehicle_repo: Arc<dyn IVehicleRepo>,
    pub service_record_repo: Arc<dyn IServiceRecordRepo>,
    pub reminder_repo: Arc<dyn IReminderRepo>,
    pub availability_repo: Arc<dyn IAvailabilityRepo>,
}

impl Repos {
    pub async fn create_mongodb(
        connection_string: &str,
        db_name: &str,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let client_options = ClientOptions::parse(connection_string).await?;
        let client = Client::with_options(client_options)?;
        let db = client.database(db_name);

        // This is needed to make sure that db is ready when opening server
        info!("DB CHECKING CONNECTION ...");
        db.collection("server-start")
            .insert_one(
                mongodb::bson::doc! {
                "server-start": 1
                },
                None,
            )
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");
        Ok(Self {
            customer_repo: Arc::new(MongoCustomerRepo::new(&db)),
            vehicle_repo: Arc::new(MongoVehicleRepo::new(&db)),
            service_record_repo: Arc::new(MongoServiceRecordRepo::new(&db)),
            reminder_repo: Arc::new(MongoReminderRepo::new(&db)),
            availability_repo: Arc::new(MongoAvailabilityRepo::new(&db)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            customer_repo: Arc::new(InMemoryCustomerRepo::new()),
            vehicle_repo: Arc::new(InMemoryVehicleRepo::new()),
            service_record_repo: Arc::new(InMemoryServiceRecordRepo::new()),
            reminder_repo: Arc::new(InMemoryReminderRepo::new()),
            availability_repo: Arc::new(InMemoryAvailabilityRepo::new()),
        }
    }
}
