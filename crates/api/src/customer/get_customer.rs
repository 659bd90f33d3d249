use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_customer::*;
use wrench_domain::{Customer, ID};
use wrench_infra::WrenchContext;

pub async fn get_customer_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;

    let usecase = GetCustomerUseCase {
        customer_id: path_params.customer_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|customer| HttpResponse::Ok().json(APIResponse::new(customer)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct GetCustomerUseCase {
    pub customer_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(customer_id) => Self::NotFound(format!(
                "The customer with id: {}, was not found.",
                customer_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCustomerUseCase {
    type Response = Customer;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .customer_repo
            .find(&self.customer_id)
            .await
            .ok_or_else(|| UseCaseError::NotFound(self.customer_id.clone()))
    }
}
