use crate::dtos::VehicleDTO;
use serde::{Deserialize, Serialize};
use wrench_domain::{Vehicle, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub vehicle: VehicleDTO,
}

impl VehicleResponse {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle: VehicleDTO::new(vehicle),
        }
    }
}

pub mod create_vehicle {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub customer_id: ID,
        pub make: String,
        pub model: String,
        pub year: i32,
        pub license_plate: Option<String>,
        pub vin: Option<String>,
        pub mileage: Option<i64>,
    }

    pub type APIResponse = VehicleResponse;
}

pub mod get_vehicle {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    pub type APIResponse = VehicleResponse;
}

pub mod get_customer_vehicles {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub vehicles: Vec<VehicleDTO>,
    }

    impl APIResponse {
        pub fn new(vehicles: Vec<Vehicle>) -> Self {
            Self {
                vehicles: vehicles.into_iter().map(VehicleDTO::new).collect(),
            }
        }
    }
}

pub mod update_vehicle {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub make: Option<String>,
        pub model: Option<String>,
        pub year: Option<i32>,
        pub license_plate: Option<String>,
        pub vin: Option<String>,
        pub mileage: Option<i64>,
    }

    pub type APIResponse = VehicleResponse;
}

pub mod delete_vehicle {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub vehicle_id: ID,
    }

    pub type APIResponse = VehicleResponse;
}
