use super::ICustomerRepo;
use crate::repos::shared::mongo_repo;
use mongo_repo::MongoDocument;
use mongodb::{
    bson::doc,
    bson::{oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};
use wrench_domain::{Customer, ID};

pub struct MongoCustomerRepo {
    collection: Collection<Document>,
}

impl MongoCustomerRepo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("customers"),
        }
    }
}

#[async_trait::async_trait]
impl ICustomerRepo for MongoCustomerRepo {
    async fn insert(&self, customer: &Customer) -> anyhow::Result<()> {
        mongo_repo::insert::<_, CustomerMongo>(&self.collection, customer).await
    }

    async fn save(&self, customer: &Customer) -> anyhow::Result<()> {
        mongo_repo::save::<_, CustomerMongo>(&self.collection, customer).await
    }

    async fn find(&self, customer_id: &ID) -> Option<Customer> {
        let oid = customer_id.inner_ref();
        mongo_repo::find::<_, CustomerMongo>(&self.collection, oid).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        mongo_repo::find_many_by::<_, CustomerMongo>(&self.collection, doc! {}).await
    }

    async fn delete(&self, customer_id: &ID) -> Option<Customer> {
        let oid = customer_id.inner_ref();
        mongo_repo::delete::<_, CustomerMongo>(&self.collection, oid).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CustomerMongo {
    _id: ObjectId,
    name: String,
    email: String,
    phone: Option<String>,
    created: i64,
    updated: i64,
}

impl MongoDocument<Customer> for CustomerMongo {
    fn to_domain(self) -> Customer {
        Customer {
            id: ID::from(self._id),
            name: self.name,
            email: self.email,
            phone: self.phone,
            created: self.created,
            updated: self.updated,
        }
    }

    fn from_domain(customer: &Customer) -> Self {
        Self {
            _id: *customer.id.inner_ref(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            created: customer.created,
            updated: customer.updated,
        }
    }

    fn get_id_filter(&self) -> Document {
        doc! {
            "_id": self._id
        }
    }
}
