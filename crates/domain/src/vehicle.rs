use crate::shared::entity::{Entity, ID};

/// A vehicle registered to exactly one `Customer`. Deleting a vehicle
/// cascades to its service records.
#[derive(Debug, Clone)]
pub struct Vehicle {
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

impl Vehicle {
    /// "2014 Volvo V60" style display used in reminder emails
    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }
}

impl Entity for Vehicle {
    fn id(&self) -> &ID {
        &self.id
    }
}
