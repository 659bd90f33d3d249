use super::IServiceRecordRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::repo::DeleteResult;
use wrench_domain::{ServiceRecord, ID};

pub struct InMemoryServiceRecordRepo {
    records: std::sync::Mutex<Vec<ServiceRecord>>,
}

impl InMemoryServiceRecordRepo {
    pub fn new() -> Self {
        Self {
            records: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRecordRepo for InMemoryServiceRecordRepo {
    async fn insert(&self, record: &ServiceRecord) -> anyhow::Result<()> {
        insert(record, &self.records);
        Ok(())
    }

    async fn save(&self, record: &ServiceRecord) -> anyhow::Result<()> {
        save(record, &self.records);
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> Option<ServiceRecord> {
        find(record_id, &self.records)
    }

    async fn find_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<Vec<ServiceRecord>> {
        Ok(find_by(&self.records, |r| r.vehicle_id == *vehicle_id))
    }

    async fn delete(&self, record_id: &ID) -> Option<ServiceRecord> {
        delete(record_id, &self.records)
    }

    async fn delete_by_vehicle(&self, vehicle_id: &ID) -> anyhow::Result<DeleteResult> {
        Ok(delete_by(&self.records, |r| r.vehicle_id == *vehicle_id))
    }
}
