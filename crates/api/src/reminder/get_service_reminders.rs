use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_service_reminders::*;
use wrench_domain::{Reminder, ID};
use wrench_infra::WrenchContext;

pub async fn get_service_reminders_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;

    let usecase = GetServiceRemindersUseCase {
        service_id: path_params.service_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct GetServiceRemindersUseCase {
    pub service_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    ServiceNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ServiceNotFound(service_id) => Self::NotFound(format!(
                "The service with id: {}, was not found.",
                service_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetServiceRemindersUseCase {
    type Response = Vec<Reminder>;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        if ctx
            .repos
            .service_record_repo
            .find(&self.service_id)
            .await
            .is_none()
        {
            return Err(UseCaseError::ServiceNotFound(self.service_id.clone()));
        }

        ctx.repos
            .reminder_repo
            .find_by_service(&self.service_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
