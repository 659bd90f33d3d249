use crate::dtos::CustomerDTO;
use serde::{Deserialize, Serialize};
use wrench_domain::{Customer, ID};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer: CustomerDTO,
}

impl CustomerResponse {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer: CustomerDTO::new(customer),
        }
    }
}

pub mod create_customer {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub email: String,
        pub phone: Option<String>,
    }

    pub type APIResponse = CustomerResponse;
}

pub mod get_customer {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    pub type APIResponse = CustomerResponse;
}

pub mod get_customers {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub customers: Vec<CustomerDTO>,
    }

    impl APIResponse {
        pub fn new(customers: Vec<Customer>) -> Self {
            Self {
                customers: customers.into_iter().map(CustomerDTO::new).collect(),
            }
        }
    }
}

pub mod update_customer {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub email: Option<String>,
        pub phone: Option<String>,
    }

    pub type APIResponse = CustomerResponse;
}

pub mod delete_customer {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    pub type APIResponse = CustomerResponse;
}
