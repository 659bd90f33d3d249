use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::update_reminder::*;
use wrench_domain::{Reminder, ReminderType, ID};
use wrench_infra::WrenchContext;

pub async fn update_reminder_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path_params.reminder_id.clone(),
        reminder_type: body.reminder_type,
        remind_at: body.remind_at,
        mileage_threshold: body.mileage_threshold,
        message: body.message,
        email: body.email,
        sent: body.sent,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub reminder_type: Option<ReminderType>,
    pub remind_at: Option<i64>,
    pub mileage_threshold: Option<i64>,
    pub message: Option<String>,
    pub email: Option<String>,
    /// Explicit edits may flip a delivered reminder back to unsent
    pub sent: Option<bool>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let mut reminder = match ctx.repos.reminder_repo.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        if let Some(reminder_type) = self.reminder_type {
            reminder.reminder_type = reminder_type;
        }
        if let Some(remind_at) = self.remind_at {
            reminder.remind_at = Some(remind_at);
        }
        if let Some(mileage_threshold) = self.mileage_threshold {
            reminder.mileage_threshold = Some(mileage_threshold);
        }
        if let Some(message) = &self.message {
            reminder.message = message.clone();
        }
        if let Some(email) = &self.email {
            reminder.email = email.clone();
        }
        if let Some(sent) = self.sent {
            reminder.sent = sent;
        }
        reminder.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .reminder_repo
            .save(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }
}

impl PermissionBoundary for UpdateReminderUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateReminder]
    }
}
