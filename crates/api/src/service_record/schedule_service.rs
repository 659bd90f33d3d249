use super::subscribers::CreateReminderOnServiceScheduled;
use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission, Principal},
    guard::Guard,
    usecase::{execute_with_policy, PermissionBoundary, Subscriber, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::error;
use wrench_api_structs::schedule_service::*;
use wrench_domain::{Day, ServiceRecord, ServiceStatus, SlotTime, ID};
use wrench_infra::WrenchContext;

pub async fn schedule_service_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (principal, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let service_type = Guard::against_empty(&body.service_type, "serviceType")?;
    let day = Guard::against_malformed_date(&body.date)?;
    let time = Guard::against_malformed_time(&body.time)?;

    let usecase = ScheduleServiceUseCase {
        vehicle_id: body.vehicle_id,
        service_type,
        day,
        time,
        requester: principal,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|record| HttpResponse::Created().json(APIResponse::new(record)))
        .map_err(WrenchError::from)
}

/// Books a service into an availability slot. The slot flip and the
/// record insert are ordered so that the flip is the single conditional
/// write every concurrent booking races through: whoever loses it never
/// writes anything.
#[derive(Debug)]
pub struct ScheduleServiceUseCase {
    pub vehicle_id: ID,
    pub service_type: String,
    pub day: Day,
    pub time: SlotTime,
    pub requester: Principal,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyServiceType,
    VehicleNotFound(ID),
    InvalidServiceDate,
    SlotUnavailable,
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyServiceType => {
                Self::BadClientData("A serviceType must be provided".into())
            }
            UseCaseError::VehicleNotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
            UseCaseError::InvalidServiceDate => {
                Self::BadClientData("The given date and time do not form a valid timestamp".into())
            }
            UseCaseError::SlotUnavailable => Self::Conflict(
                "The requested time slot is not available for booking".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ScheduleServiceUseCase {
    type Response = ServiceRecord;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        if self.service_type.trim().is_empty() {
            return Err(UseCaseError::EmptyServiceType);
        }

        let vehicle = match ctx.repos.vehicle_repo.find(&self.vehicle_id).await {
            Some(vehicle) => vehicle,
            None => return Err(UseCaseError::VehicleNotFound(self.vehicle_id.clone())),
        };

        // Day and slot time are combined in the workshop's fixed offset,
        // not the caller's local zone
        let service_date = self
            .day
            .timestamp_millis_at(self.time, &ctx.config.booking_utc_offset)
            .ok_or(UseCaseError::InvalidServiceDate)?;

        // Take the slot before inserting anything. The conditional update
        // refuses blocked days, unknown slots and already taken slots in
        // one go, so concurrent bookings of the same slot leave exactly
        // one winner.
        let won_slot = ctx
            .repos
            .availability_repo
            .book_slot(&self.day, self.time)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        if !won_slot {
            return Err(UseCaseError::SlotUnavailable);
        }

        let now = ctx.sys.get_timestamp_millis();
        let record = ServiceRecord {
            id: Default::default(),
            vehicle_id: vehicle.id.clone(),
            service_type: self.service_type.clone(),
            service_date,
            status: ServiceStatus::Scheduled,
            mileage: None,
            description: None,
            cost: None,
            technician_id: None,
            customer_name: self.requester.name.clone(),
            customer_email: self.requester.email.clone(),
            created: now,
            updated: now,
        };

        if let Err(e) = ctx.repos.service_record_repo.insert(&record).await {
            error!(
                "Unable to store booked service, releasing the slot again: {:?}",
                e
            );
            if let Err(e) = ctx
                .repos
                .availability_repo
                .set_slot_available(&self.day, self.time, true)
                .await
            {
                error!("Unable to release slot of failed booking: {:?}", e);
            }
            return Err(UseCaseError::StorageError);
        }

        Ok(record)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateReminderOnServiceScheduled)]
    }
}

impl PermissionBoundary for ScheduleServiceUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ScheduleService]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::availability::set_availability::SetAvailabilityUseCase;
    use crate::shared::auth::Role;
    use crate::shared::usecase::execute;
    use wrench_domain::{Customer, Vehicle};

    struct TestContext {
        ctx: WrenchContext,
        vehicle: Vehicle,
    }

    async fn setup() -> TestContext {
        let ctx = WrenchContext::create_inmemory();

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
            license_plate: Some("ABC123".into()),
            vin: None,
            mileage: Some(60_000),
            created: 0,
            updated: 0,
        };
        ctx.repos.vehicle_repo.insert(&vehicle).await.unwrap();

        TestContext { ctx, vehicle }
    }

    fn requester() -> Principal {
        Principal {
            user_id: ID::new(),
            name: "Maria Svensson".into(),
            email: "maria@example.com".into(),
            role: Role::Client,
        }
    }

    async fn open_day(ctx: &WrenchContext, day: &str, is_blocked: bool) {
        let mut usecase = SetAvailabilityUseCase {
            day: day.parse().unwrap(),
            is_blocked,
            working_hours: Default::default(),
            time_slots: None,
            updated_by: ID::new(),
        };
        usecase.execute(ctx).await.unwrap();
    }

    fn booking(vehicle: &Vehicle, day: &str, time: &str) -> ScheduleServiceUseCase {
        ScheduleServiceUseCase {
            vehicle_id: vehicle.id.clone(),
            service_type: "Oil Change".into(),
            day: day.parse().unwrap(),
            time: time.parse().unwrap(),
            requester: requester(),
        }
    }

    #[actix_web::test]
    async fn books_an_available_slot() {
        let TestContext { ctx, vehicle } = setup().await;
        open_day(&ctx, "2025-03-10", false).await;

        let mut usecase = booking(&vehicle, "2025-03-10", "09:00");
        let record = usecase.execute(&ctx).await.unwrap();

        assert_eq!(record.status, ServiceStatus::Scheduled);
        assert_eq!(record.customer_email, "maria@example.com");
        assert!(ctx
            .repos
            .service_record_repo
            .find(&record.id)
            .await
            .is_some());

        // the booked slot flipped, all others stayed available
        let availability = ctx
            .repos
            .availability_repo
            .find(&"2025-03-10".parse().unwrap())
            .await
            .unwrap();
        let booked = availability.slot("09:00".parse().unwrap()).unwrap();
        assert!(!booked.available);
        let others = availability
            .time_slots
            .iter()
            .filter(|s| s.time.to_string() != "09:00")
            .all(|s| s.available);
        assert!(others);
    }

    #[actix_web::test]
    async fn second_booking_of_same_slot_loses() {
        let TestContext { ctx, vehicle } = setup().await;
        open_day(&ctx, "2025-03-10", false).await;

        let mut first = booking(&vehicle, "2025-03-10", "09:00");
        first.execute(&ctx).await.unwrap();

        let mut second = booking(&vehicle, "2025-03-10", "09:00");
        let err = second.execute(&ctx).await.unwrap_err();
        assert_eq!(err, UseCaseError::SlotUnavailable);

        // no record was written for the loser
        let services = ctx
            .repos
            .service_record_repo
            .find_by_vehicle(&vehicle.id)
            .await
            .unwrap();
        assert_eq!(services.len(), 1);
    }

    #[actix_web::test]
    async fn rejects_booking_on_blocked_day() {
        let TestContext { ctx, vehicle } = setup().await;
        // blocked day with every individual slot still flagged available
        open_day(&ctx, "2025-03-10", true).await;

        let mut usecase = booking(&vehicle, "2025-03-10", "09:00");
        let err = usecase.execute(&ctx).await.unwrap_err();
        assert_eq!(err, UseCaseError::SlotUnavailable);
    }

    #[actix_web::test]
    async fn rejects_booking_on_unconfigured_day() {
        let TestContext { ctx, vehicle } = setup().await;

        let mut usecase = booking(&vehicle, "2025-03-10", "09:00");
        let err = usecase.execute(&ctx).await.unwrap_err();
        assert_eq!(err, UseCaseError::SlotUnavailable);
    }

    #[actix_web::test]
    async fn rejects_unknown_vehicle() {
        let TestContext { ctx, vehicle: _ } = setup().await;
        open_day(&ctx, "2025-03-10", false).await;

        let ghost = ID::new();
        let mut usecase = ScheduleServiceUseCase {
            vehicle_id: ghost.clone(),
            service_type: "Oil Change".into(),
            day: "2025-03-10".parse().unwrap(),
            time: "09:00".parse().unwrap(),
            requester: requester(),
        };
        let err = usecase.execute(&ctx).await.unwrap_err();
        assert_eq!(err, UseCaseError::VehicleNotFound(ghost));

        // failed validation left the slot untouched
        let availability = ctx
            .repos
            .availability_repo
            .find(&"2025-03-10".parse().unwrap())
            .await
            .unwrap();
        assert!(availability.slot("09:00".parse().unwrap()).unwrap().available);
    }

    #[actix_web::test]
    async fn creates_follow_up_reminder_through_subscriber() {
        let TestContext { ctx, vehicle } = setup().await;
        open_day(&ctx, "2025-03-10", false).await;

        let usecase = booking(&vehicle, "2025-03-10", "09:00");
        let record = execute(usecase, &ctx).await.unwrap();

        let reminders = ctx
            .repos
            .reminder_repo
            .find_by_service(&record.id)
            .await
            .unwrap();
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].email, "maria@example.com");
        assert_eq!(
            reminders[0].remind_at,
            Some(record.service_date - 24 * 60 * 60 * 1000)
        );
        assert!(!reminders[0].sent);
    }
}
