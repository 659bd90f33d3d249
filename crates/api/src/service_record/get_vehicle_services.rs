use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_vehicle_services::*;
use wrench_domain::{ServiceRecord, ID};
use wrench_infra::WrenchContext;

pub async fn get_vehicle_services_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;

    let usecase = GetVehicleServicesUseCase {
        vehicle_id: path_params.vehicle_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|records| HttpResponse::Ok().json(APIResponse::new(records)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct GetVehicleServicesUseCase {
    pub vehicle_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    VehicleNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::VehicleNotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetVehicleServicesUseCase {
    type Response = Vec<ServiceRecord>;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.vehicle_repo.find(&self.vehicle_id).await.is_none() {
            return Err(UseCaseError::VehicleNotFound(self.vehicle_id.clone()));
        }

        ctx.repos
            .service_record_repo
            .find_by_vehicle(&self.vehicle_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
