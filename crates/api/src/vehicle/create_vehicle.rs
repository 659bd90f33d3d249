use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    guard::Guard,
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::create_vehicle::*;
use wrench_domain::{Vehicle, ID};
use wrench_infra::WrenchContext;

pub async fn create_vehicle_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let make = Guard::against_empty(&body.make, "make")?;
    let model = Guard::against_empty(&body.model, "model")?;

    let usecase = CreateVehicleUseCase {
        customer_id: body.customer_id,
        make,
        model,
        year: body.year,
        license_plate: body.license_plate,
        vin: body.vin,
        mileage: body.mileage,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|vehicle| HttpResponse::Created().json(APIResponse::new(vehicle)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct CreateVehicleUseCase {
    pub customer_id: ID,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub mileage: Option<i64>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    CustomerNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CustomerNotFound(customer_id) => Self::NotFound(format!(
                "The customer with id: {}, was not found.",
                customer_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateVehicleUseCase {
    type Response = Vehicle;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        if ctx
            .repos
            .customer_repo
            .find(&self.customer_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::CustomerNotFound(self.customer_id.clone()));
        }

        let now = ctx.sys.get_timestamp_millis();
        let vehicle = Vehicle {
            id: Default::default(),
            customer_id: self.customer_id.clone(),
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            license_plate: self.license_plate.clone(),
            vin: self.vin.clone(),
            mileage: self.mileage,
            created: now,
            updated: now,
        };

        ctx.repos
            .vehicle_repo
            .insert(&vehicle)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(vehicle)
    }
}

impl PermissionBoundary for CreateVehicleUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateVehicle]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wrench_domain::Customer;

    #[actix_web::test]
    async fn rejects_vehicle_for_unknown_customer() {
        let ctx = WrenchContext::create_inmemory();

        let ghost = ID::new();
        let mut usecase = CreateVehicleUseCase {
            customer_id: ghost.clone(),
            make: "Volvo".into(),
            model: "V60".into(),
            year: 2019,
            license_plate: None,
            vin: None,
            mileage: None,
        };

        assert_eq!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::CustomerNotFound(ghost)
        );
    }

    #[actix_web::test]
    async fn creates_vehicle_for_existing_customer() {
        let ctx = WrenchContext::create_inmemory();

        let customer = Customer {
            id: Default::default(),
            name: "Maria Svensson".into(),
            email: "maria@example.com".into(),
            phone: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.customer_repo.insert(&customer).await.unwrap();

        let mut usecase = CreateVehicleUseCase {
            customer_id: customer.id.clone(),
            make: "Volvo".into(),
            model: "V60".into(),
            year: 2019,
            license_plate: Some("ABC123".into()),
            vin: None,
            mileage: Some(60_000),
        };
        let vehicle = usecase.execute(&ctx).await.unwrap();

        assert!(ctx.repos.vehicle_repo.find(&vehicle.id).await.is_some());
        assert_eq!(vehicle.display_name(), "2019 Volvo V60");
    }
}
