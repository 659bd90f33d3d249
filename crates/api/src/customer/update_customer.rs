use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::update_customer::*;
use wrench_domain::{Customer, ID};
use wrench_infra::WrenchContext;

pub async fn update_customer_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateCustomerUseCase {
        customer_id: path_params.customer_id.clone(),
        name: body.name,
        email: body.email,
        phone: body.phone,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|customer| HttpResponse::Ok().json(APIResponse::new(customer)))
        .map_err(WrenchError::from)
}

/// Edits customer contact info. Snapshots on existing service records
/// are deliberately left alone.
#[derive(Debug)]
pub struct UpdateCustomerUseCase {
    pub customer_id: ID,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(customer_id) => Self::NotFound(format!(
                "The customer with id: {}, was not found.",
                customer_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCustomerUseCase {
    type Response = Customer;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let mut customer = match ctx.repos.customer_repo.find(&self.customer_id).await {
            Some(customer) => customer,
            None => return Err(UseCaseError::NotFound(self.customer_id.clone())),
        };

        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            customer.phone = Some(phone.clone());
        }
        customer.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .customer_repo
            .save(&customer)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(customer)
    }
}

impl PermissionBoundary for UpdateCustomerUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateCustomer]
    }
}
