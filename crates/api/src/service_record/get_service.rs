use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_service::*;
use wrench_domain::{ServiceRecord, ID};
use wrench_infra::WrenchContext;

pub async fn get_service_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;

    let usecase = GetServiceUseCase {
        service_id: path_params.service_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct GetServiceUseCase {
    pub service_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(service_id) => Self::NotFound(format!(
                "The service with id: {}, was not found.",
                service_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetServiceUseCase {
    type Response = ServiceRecord;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .service_record_repo
            .find(&self.service_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.service_id.clone()))
    }
}
