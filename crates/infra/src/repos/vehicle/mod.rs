mod inmemory;
mod mongo;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryVehicleRepo;
pub use mongo::MongoVehicleRepo;
use wrench_domain::{Vehicle, ID};

#[async_trait::async_trait]
pub trait IVehicleRepo: Send + Sync {
    async fn insert(&self, vehicle: &Vehicle) -> anyhow::Result<()>;
    async fn save(&self, vehicle: &Vehicle) -> anyhow::Result<()>;
    async fn find(&self, vehicle_id: &ID) -> Option<Vehicle>;
    async fn find_by_customer(&self, customer_id: &ID) -> anyhow::Result<Vec<Vehicle>>;
    async fn delete(&self, vehicle_id: &ID) -> Option<Vehicle>;
    async fn delete_by_customer(&self, customer_id: &ID) -> anyhow::Result<DeleteResult>;
}
