use serde::{Deserialize, Serialize};
use wrench_domain::{Customer, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDTO {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl CustomerDTO {
    pub fn new(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            created: customer.created,
            updated: customer.updated,
        }
    }
}
