use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    guard::Guard,
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::create_service::*;
use wrench_domain::{ServiceRecord, ServiceStatus, ID};
use wrench_infra::WrenchContext;

pub async fn create_service_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let service_type = Guard::against_empty(&body.service_type, "serviceType")?;

    let usecase = CreateServiceUseCase {
        vehicle_id: body.vehicle_id,
        service_type,
        service_date: body.service_date,
        status: body.status.unwrap_or(ServiceStatus::Scheduled),
        mileage: body.mileage,
        description: body.description,
        cost: body.cost,
        technician_id: body.technician_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|record| HttpResponse::Created().json(APIResponse::new(record)))
        .map_err(WrenchError::from)
}

/// Manual service entry by a worker, bypassing the slot machinery. The
/// customer snapshot is taken from the vehicle's current owner.
#[derive(Debug)]
pub struct CreateServiceUseCase {
    pub vehicle_id: ID,
    pub service_type: String,
    pub service_date: i64,
    pub status: ServiceStatus,
    pub mileage: Option<i64>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub technician_id: Option<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    VehicleNotFound(ID),
    CustomerNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::VehicleNotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
            UseCaseError::CustomerNotFound(customer_id) => Self::NotFound(format!(
                "The customer with id: {}, was not found.",
                customer_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateServiceUseCase {
    type Response = ServiceRecord;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let vehicle = match ctx.repos.vehicle_repo.find(&self.vehicle_id).await {
            Some(vehicle) => vehicle,
            None => return Err(UseCaseError::VehicleNotFound(self.vehicle_id.clone())),
        };
        let customer = match ctx.repos.customer_repo.find(&vehicle.customer_id).await {
            Some(customer) => customer,
            None => return Err(UseCaseError::CustomerNotFound(vehicle.customer_id.clone())),
        };

        let now = ctx.sys.get_timestamp_millis();
        let record = ServiceRecord {
            id: Default::default(),
            vehicle_id: vehicle.id.clone(),
            service_type: self.service_type.clone(),
            service_date: self.service_date,
            status: self.status,
            mileage: self.mileage,
            description: self.description.clone(),
            cost: self.cost,
            technician_id: self.technician_id.clone(),
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            created: now,
            updated: now,
        };

        ctx.repos
            .service_record_repo
            .insert(&record)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(record)
    }
}

impl PermissionBoundary for CreateServiceUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateServiceRecord]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wrench_domain::{Customer, Vehicle};

    #[actix_web::test]
    async fn snapshots_customer_contact_on_manual_entry() {
        let ctx = WrenchContext::create_inmemory();

        let customer = Customer {
            id: Default::default(),
            name: "Jonas Berg".into(),
            email: "jonas@example.com".into(),
            phone: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.customer_repo.insert(&customer).await.unwrap();
        let vehicle = Vehicle {
            id: Default::default(),
            customer_id: customer.id.clone(),
            make: "Saab".into(),
            model: "900".into(),
            year: 1996,
            license_plate: None,
            vin: None,
            mileage: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.vehicle_repo.insert(&vehicle).await.unwrap();

        let mut usecase = CreateServiceUseCase {
            vehicle_id: vehicle.id.clone(),
            service_type: "Brake Inspection".into(),
            service_date: 1_000_000,
            status: ServiceStatus::Completed,
            mileage: Some(180_000),
            description: Some("Front pads replaced".into()),
            cost: Some(120.0),
            technician_id: None,
        };
        let record = usecase.execute(&ctx).await.unwrap();

        assert_eq!(record.customer_name, "Jonas Berg");
        assert_eq!(record.customer_email, "jonas@example.com");
        assert_eq!(record.status, ServiceStatus::Completed);
    }

    #[actix_web::test]
    async fn rejects_unknown_vehicle() {
        let ctx = WrenchContext::create_inmemory();

        let ghost = ID::new();
        let mut usecase = CreateServiceUseCase {
            vehicle_id: ghost.clone(),
            service_type: "Brake Inspection".into(),
            service_date: 1_000_000,
            status: ServiceStatus::Scheduled,
            mileage: None,
            description: None,
            cost: None,
            technician_id: None,
        };

        let err = usecase.execute(&ctx).await.unwrap_err();
        assert_eq!(err, UseCaseError::VehicleNotFound(ghost));
    }
}
