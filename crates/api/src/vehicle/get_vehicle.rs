use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_vehicle::*;
use wrench_domain::{Vehicle, ID};
use wrench_infra::WrenchContext;

pub async fn get_vehicle_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;

    let usecase = GetVehicleUseCase {
        vehicle_id: path_params.vehicle_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|vehicle| HttpResponse::Ok().json(APIResponse::new(vehicle)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct GetVehicleUseCase {
    pub vehicle_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetVehicleUseCase {
    type Response = Vehicle;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .vehicle_repo
            .find(&self.vehicle_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.vehicle_id.clone()))
    }
}
