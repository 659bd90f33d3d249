use serde::{Deserialize, Serialize};
use wrench_domain::{ServiceRecord, ServiceStatus, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordDTO {
    pub id: ID,
    pub vehicle_id: ID,
    pub service_type: String,
    pub service_date: i64,
    pub status: ServiceStatus,
    pub mileage: Option<i64>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub technician_id: Option<ID>,
    pub customer_name: String,
    pub customer_email: String,
    pub created: i64,
    pub updated: i64,
}

impl ServiceRecordDTO {
    pub fn new(record: ServiceRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            service_type: record.service_type,
            service_date: record.service_date,
            status: record.status,
            mileage: record.mileage,
            description: record.description,
            cost: record.cost,
            technician_id: record.technician_id,
            customer_name: record.customer_name,
            customer_email: record.customer_email,
            created: record.created,
            updated: record.updated,
        }
    }
}
