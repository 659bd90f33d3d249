use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_customers::*;
use wrench_domain::Customer;
use wrench_infra::WrenchContext;

pub async fn get_customers_controller(
    http_req: HttpRequest,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;

    let usecase = GetCustomersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|customers| HttpResponse::Ok().json(APIResponse::new(customers)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct GetCustomersUseCase {}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCustomersUseCase {
    type Response = Vec<Customer>;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .customer_repo
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
