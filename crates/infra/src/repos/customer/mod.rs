mod inmemory;
mod mongo;

pub use inmemory::InMemoryCustomerRepo;
pub use mongo::MongoCustomerRepo;
use wrench_domain::{Customer, ID};

#[async_trait::async_trait]
pub trait ICustomerRepo: Send + Sync {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()>;
    async fn save(&self, customer: &Customer) -> anyhow::Result<()>;
    async fn find(&self, customer_id: &ID) -> Option<Customer>;
    async fn find_all(&self) -> anyhow::Result<Vec<Customer>>;
    async fn delete(&self, customer_id: &ID) -> Option<Customer>;
}
