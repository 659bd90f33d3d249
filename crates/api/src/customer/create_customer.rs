use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    guard::Guard,
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::create_customer::*;
use wrench_domain::Customer;
use wrench_infra::WrenchContext;

pub async fn create_customer_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let name = Guard::against_empty(&body.name, "name")?;
    let email = Guard::against_empty(&body.email, "email")?;

    let usecase = CreateCustomerUseCase {
        name,
        email,
        phone: body.phone,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|customer| HttpResponse::Created().json(APIResponse::new(customer)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct CreateCustomerUseCase {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

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
impl UseCase for CreateCustomerUseCase {
    type Response = Customer;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let customer = Customer {
            id: Default::default(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            created: now,
            updated: now,
        };

        ctx.repos
            .customer_repo
            .insert(&customer)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(customer)
    }
}

impl PermissionBoundary for CreateCustomerUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateCustomer]
    }
}
