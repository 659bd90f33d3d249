use crate::dtos::ServiceRecordDTO;
use serde::{Deserialize, Serialize};
use wrench_domain::{ServiceRecord, ServiceStatus, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordResponse {
    pub service: ServiceRecordDTO,
}

impl ServiceRecordResponse {
    pub fn new(record: ServiceRecord) -> Self {
        Self {
            service: ServiceRecordDTO::new(record),
        }
    }
}

pub mod schedule_service {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub vehicle_id: ID,
        pub service_type: String,
        pub date: String,
        pub time: String,
    }

    pub type APIResponse = ServiceRecordResponse;
}

pub mod create_service {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub vehicle_id: ID,
        pub service_type: String,
        pub service_date: i64,
        pub status: Option<ServiceStatus>,
        pub mileage: Option<i64>,
        pub description: Option<String>,
        pub cost: Option<f64>,
        pub technician_id: Option<ID>,
    }

    pub type APIResponse = ServiceRecordResponse;
}

pub mod get_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceRecordResponse;
}

pub mod get_vehicle_services {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub services: Vec<ServiceRecordDTO>,
    }

    impl APIResponse {
        pub fn new(services: Vec<ServiceRecord>) -> Self {
            Self {
                services: services.into_iter().map(ServiceRecordDTO::new).collect(),
            }
        }
    }
}

pub mod update_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub service_type: Option<String>,
        pub status: Option<ServiceStatus>,
        pub mileage: Option<i64>,
        pub description: Option<String>,
        pub cost: Option<f64>,
        pub technician_id: Option<ID>,
    }

    pub type APIResponse = ServiceRecordResponse;
}

pub mod delete_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceRecordResponse;
}
