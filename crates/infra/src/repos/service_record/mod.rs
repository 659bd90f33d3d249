mod inmemory;
mod mongo;

use crate::repos::shared::repo::DeleteResult;
pub use inmemory::InMemoryServiceRecordRepo;
pub use mongo::MongoServiceRecordRepo;
use wrench_domain::{ServiceRecord, ID};

#[async_trait::async_trait]
pub trait IServiceRecordRepo: Send + Sync {
    async fn insert(&self, record: &ServiceRecord) -> anyhow::Result<()>;
    async fn save(&self, record: &ServiceRecord) -> anyhow::Result<()>;
    async fn find(&self, record_id: &ID) -> Option<ServiceRecord>;
    async fn find_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<Vec<ServiceRecord>>;
    async fn delete(&self, record_id: &ID) -> Option<ServiceRecord>;
    async fn delete_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<DeleteResult>;
}
