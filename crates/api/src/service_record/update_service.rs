use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::update_service::*;
use wrench_domain::{ServiceRecord, ServiceStatus, ID};
use wrench_infra::WrenchContext;

pub async fn update_service_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateServiceUseCase {
        service_id: path_params.service_id.clone(),
        service_type: body.service_type,
        status: body.status,
        mileage: body.mileage,
        description: body.description,
        cost: body.cost,
        technician_id: body.technician_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct UpdateServiceUseCase {
    pub service_id: ID,
    pub service_type: Option<String>,
    pub status: Option<ServiceStatus>,
    pub mileage: Option<i64>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub technician_id: Option<ID>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyServiceType,
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(service_id) => Self::NotFound(format!(
                "The service with id: {}, was not found.",
                service_id
            )),
            UseCaseError::EmptyServiceType => {
                Self::BadClientData("A serviceType must not be empty".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateServiceUseCase {
    type Response = ServiceRecord;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let mut record = match ctx.repos.service_record_repo.find(&self.service_id).await {
            Some(record) => record,
            None => return Err(UseCaseError::NotFound(self.service_id.clone())),
        };

        if let Some(service_type) = &self.service_type {
            if service_type.trim().is_empty() {
                return Err(UseCaseError::EmptyServiceType);
            }
            record.service_type = service_type.clone();
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(mileage) = self.mileage {
            record.mileage = Some(mileage);
        }
        if let Some(description) = &self.description {
            record.description = Some(description.clone());
        }
        if let Some(cost) = self.cost {
            record.cost = Some(cost);
        }
        if let Some(technician_id) = &self.technician_id {
            record.technician_id = Some(technician_id.clone());
        }
        record.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .service_record_repo
            .save(&record)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(record)
    }
}

impl PermissionBoundary for UpdateServiceUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateServiceRecord]
    }
}
