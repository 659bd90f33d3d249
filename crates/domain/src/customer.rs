use crate::shared::entity::{Entity, ID};

/// A workshop customer. Owns zero or more `Vehicle`s; deleting a customer
/// cascades to them.
#[derive(Debug, Clone)]
pub struct Customer {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created: i64,
    pub updated: i64,
}

impl Entity for Customer {
    fn id(&self) -> &ID {
        &self.id
    }
}
