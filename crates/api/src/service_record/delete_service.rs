use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Datelike, TimeZone, Timelike};
use tracing::error;
use wrench_api_structs::delete_service::*;
use wrench_domain::{Day, ServiceRecord, ServiceStatus, SlotTime, ID};
use wrench_infra::WrenchContext;

pub async fn delete_service_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let usecase = DeleteServiceUseCase {
        service_id: path_params.service_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(WrenchError::from)
}

/// Deletes a service and its reminders. Cancelling a still scheduled
/// booking puts its slot back on the market.
#[derive(Debug)]
pub struct DeleteServiceUseCase {
    pub service_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(service_id) => Self::NotFound(format!(
                "The service with id: {}, was not found.",
                service_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteServiceUseCase {
    type Response = ServiceRecord;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let record = match ctx.repos.service_record_repo.delete(&self.service_id).await {
            Some(record) => record,
            None => return Err(UseCaseError::NotFound(self.service_id.clone())),
        };

        if let Err(e) = ctx
            .repos
            .reminder_repo
            .delete_by_service(&self.service_id)
            .await
        {
            error!("Unable to delete reminders of deleted service: {:?}", e);
        }

        if record.status == ServiceStatus::Scheduled {
            release_booked_slot(ctx, &record).await;
        }

        Ok(record)
    }
}

/// Recovers the slot key from the stored timestamp and frees it again
async fn release_booked_slot(ctx: &WrenchContext, record: &ServiceRecord) {
    let offset = &ctx.config.booking_utc_offset;
    let local = match offset.timestamp_millis_opt(record.service_date).single() {
        Some(local) => local,
        None => return,
    };
    let day = match Day::new(local.year(), local.month(), local.day()) {
        Ok(day) => day,
        Err(_) => return,
    };
    let time = match SlotTime::new(local.hour(), local.minute()) {
        Ok(time) => time,
        Err(_) => return,
    };

    if let Err(e) = ctx
        .repos
        .availability_repo
        .set_slot_available(&day, time, true)
        .await
    {
        error!("Unable to release slot of cancelled service: {:?}", e);
    }
}

impl PermissionBoundary for DeleteServiceUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteServiceRecord]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::availability::set_availability::SetAvailabilityUseCase;
    use crate::service_record::schedule_service::ScheduleServiceUseCase;
    use crate::shared::auth::{Principal, Role};
    use wrench_domain::{Customer, Vehicle};

    async fn booked_service(ctx: &WrenchContext) -> ServiceRecord {
        let customer = Customer {
            id: Default::default(),
            name: "Maria Svensson".into(),
            email: "maria@example.com".into(),
            phone: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.customer_repo.insert(&customer).await.unwrap();
        let vehicle = Vehicle {
            id: Default::default(),
            customer_id: customer.id.clone(),
            make: "Volvo".into(),
            model: "V60".into(),
            year: 2019,
            license_plate: None,
            vin: None,
            mileage: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.vehicle_repo.insert(&vehicle).await.unwrap();

        let mut open_day = SetAvailabilityUseCase {
            day: "2025-03-10".parse().unwrap(),
            is_blocked: false,
            working_hours: Default::default(),
            time_slots: None,
            updated_by: ID::new(),
        };
        open_day.execute(ctx).await.unwrap();

        let mut booking = ScheduleServiceUseCase {
            vehicle_id: vehicle.id.clone(),
            service_type: "Oil Change".into(),
            day: "2025-03-10".parse().unwrap(),
            time: "09:00".parse().unwrap(),
            requester: Principal {
                user_id: ID::new(),
                name: "Maria Svensson".into(),
                email: "maria@example.com".into(),
                role: Role::Client,
            },
        };
        booking.execute(ctx).await.unwrap()
    }

    #[actix_web::test]
    async fn deleting_scheduled_service_frees_its_slot() {
        let ctx = WrenchContext::create_inmemory();
        let record = booked_service(&ctx).await;

        let day: Day = "2025-03-10".parse().unwrap();
        let before = ctx.repos.availability_repo.find(&day).await.unwrap();
        assert!(!before.slot("09:00".parse().unwrap()).unwrap().available);

        let mut usecase = DeleteServiceUseCase {
            service_id: record.id.clone(),
        };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx
            .repos
            .service_record_repo
            .find(&record.id)
            .await
            .is_none());
        let after = ctx.repos.availability_repo.find(&day).await.unwrap();
        assert!(after.slot("09:00".parse().unwrap()).unwrap().available);
    }

    #[actix_web::test]
    async fn deleting_service_cascades_to_reminders() {
        let ctx = WrenchContext::create_inmemory();
        let record = booked_service(&ctx).await;

        let reminder = wrench_domain::Reminder {
            id: Default::default(),
            service_id: record.id.clone(),
            vehicle_id: record.vehicle_id.clone(),
            customer_id: ID::new(),
            reminder_type: wrench_domain::ReminderType::Time,
            remind_at: Some(0),
            mileage_threshold: None,
            message: "Due".into(),
            email: "maria@example.com".into(),
            sent: false,
            created: 0,
            updated: 0,
        };
        ctx.repos.reminder_repo.insert(&reminder).await.unwrap();

        let mut usecase = DeleteServiceUseCase {
            service_id: record.id.clone(),
        };
        usecase.execute(&ctx).await.unwrap();

        let left = ctx
            .repos
            .reminder_repo
            .find_by_service(&record.id)
            .await
            .unwrap();
        assert!(left.is_empty());
    }
}
