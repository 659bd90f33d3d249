use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_customer_vehicles::*;
use wrench_domain::{Vehicle, ID};
use wrench_infra::WrenchContext;

pub async fn get_customer_vehicles_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;

    let usecase = GetCustomerVehiclesUseCase {
        customer_id: path_params.customer_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|vehicles| HttpResponse::Ok().json(APIResponse::new(vehicles)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct GetCustomerVehiclesUseCase {
    pub customer_id: ID,
}

#[derive(Debug)]
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
impl UseCase for GetCustomerVehiclesUseCase {
    type Response = Vec<Vehicle>;

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

        ctx.repos
            .vehicle_repo
            .find_by_customer(&self.customer_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
