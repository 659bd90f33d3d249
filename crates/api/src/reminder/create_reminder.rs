use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    guard::Guard,
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::create_reminder::*;
use wrench_domain::{Reminder, ReminderType, ID};
use wrench_infra::WrenchContext;

pub async fn create_reminder_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let message = Guard::against_empty(&body.message, "message")?;

    let usecase = CreateReminderUseCase {
        service_id: body.service_id,
        reminder_type: body.reminder_type,
        remind_at: body.remind_at,
        mileage_threshold: body.mileage_threshold,
        message,
        email: body.email,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub service_id: ID,
    pub reminder_type: ReminderType,
    pub remind_at: Option<i64>,
    pub mileage_threshold: Option<i64>,
    pub message: String,
    /// Defaults to the owning customer's address
    pub email: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    ServiceNotFound(ID),
    VehicleNotFound(ID),
    CustomerNotFound(ID),
    MissingDueTrigger,
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ServiceNotFound(service_id) => Self::NotFound(format!(
                "The service with id: {}, was not found.",
                service_id
            )),
            UseCaseError::VehicleNotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
            UseCaseError::CustomerNotFound(customer_id) => Self::NotFound(format!(
                "The customer with id: {}, was not found.",
                customer_id
            )),
            UseCaseError::MissingDueTrigger => Self::BadClientData(
                "A reminder needs a remindAt timestamp or a mileageThreshold matching its type"
                    .into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let triggers_valid = match self.reminder_type {
            ReminderType::Time => self.remind_at.is_some(),
            ReminderType::Mileage => self.mileage_threshold.is_some(),
            ReminderType::Both => self.remind_at.is_some() && self.mileage_threshold.is_some(),
        };
        if !triggers_valid {
            return Err(UseCaseError::MissingDueTrigger);
        }

        let service = match ctx.repos.service_record_repo.find(&self.service_id).await {
            Some(service) => service,
            None => return Err(UseCaseError::ServiceNotFound(self.service_id.clone())),
        };
        let vehicle = match ctx.repos.vehicle_repo.find(&service.vehicle_id).await {
            Some(vehicle) => vehicle,
            None => return Err(UseCaseError::VehicleNotFound(service.vehicle_id.clone())),
        };
        let customer = match ctx.repos.customer_repo.find(&vehicle.customer_id).await {
            Some(customer) => customer,
            None => return Err(UseCaseError::CustomerNotFound(vehicle.customer_id.clone())),
        };

        let now = ctx.sys.get_timestamp_millis();
        let reminder = Reminder {
            id: Default::default(),
            service_id: service.id.clone(),
            vehicle_id: vehicle.id.clone(),
            customer_id: customer.id.clone(),
            reminder_type: self.reminder_type,
            remind_at: self.remind_at,
            mileage_threshold: self.mileage_threshold,
            message: self.message.clone(),
            email: self.email.clone().unwrap_or_else(|| customer.email.clone()),
            sent: false,
            created: now,
            updated: now,
        };

        ctx.repos
            .reminder_repo
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}

impl PermissionBoundary for CreateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::CreateReminder]
    }
}
