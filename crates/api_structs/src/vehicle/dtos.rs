use serde::{Deserialize, Serialize};
use wrench_domain::{Vehicle, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDTO {
    pub id: ID,
    pub customer_id: ID,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub mileage: Option<i64>,
    pub created: i64,
    pub updated: i64,
}

impl VehicleDTO {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            customer_id: vehicle.customer_id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
            vin: vehicle.vin,
            mileage: vehicle.mileage,
            created: vehicle.created,
            updated: vehicle.updated,
        }
    }
}
