use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    guard::Guard,
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::set_availability::*;
use wrench_domain::{
    generate_slots, slots_strictly_increasing, Day, DayAvailability, TimeSlot, WorkingHours, ID,
};
use wrench_infra::WrenchContext;

pub async fn set_availability_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (principal, policy) = protect_route(&http_req, &ctx)?;

    let day = Guard::against_malformed_date(&path_params.date)?;
    let body = body.0;
    let working_hours = WorkingHours {
        start: Guard::against_malformed_time(&body.working_hours.start)?,
        end: Guard::against_malformed_time(&body.working_hours.end)?,
        interval_minutes: body.working_hours.interval,
    };
    let time_slots = match body.time_slots {
        Some(slots) => {
            let mut parsed = Vec::with_capacity(slots.len());
            for slot in slots {
                parsed.push(TimeSlot {
                    time: Guard::against_malformed_time(&slot.time)?,
                    available: slot.available,
                });
            }
            Some(parsed)
        }
        None => None,
    };

    let usecase = SetAvailabilityUseCase {
        day,
        is_blocked: body.is_blocked,
        working_hours,
        time_slots,
        updated_by: principal.user_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|availability| HttpResponse::Ok().json(APIResponse::new(availability)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct SetAvailabilityUseCase {
    pub day: Day,
    pub is_blocked: bool,
    pub working_hours: WorkingHours,
    /// When absent the slots are generated from the working hours
    pub time_slots: Option<Vec<TimeSlot>>,
    pub updated_by: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    InvalidSlotOrder,
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidSlotOrder => Self::BadClientData(
                "Time slots must be strictly increasing and unique".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SetAvailabilityUseCase {
    type Response = DayAvailability;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let time_slots = match self.time_slots.take() {
            Some(slots) => {
                if !slots_strictly_increasing(&slots) {
                    return Err(UseCaseError::InvalidSlotOrder);
                }
                slots
            }
            None => generate_slots(&self.working_hours),
        };

        let availability = DayAvailability {
            day: self.day,
            is_blocked: self.is_blocked,
            working_hours: self.working_hours,
            time_slots,
            updated: ctx.sys.get_timestamp_millis(),
            updated_by: Some(self.updated_by.clone()),
        };

        // Upsert: already booked services are left as they are
        ctx.repos
            .availability_repo
            .upsert(&availability)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(availability)
    }
}

impl PermissionBoundary for SetAvailabilityUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ManageAvailability]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn usecase_for(day: &str) -> SetAvailabilityUseCase {
        SetAvailabilityUseCase {
            day: day.parse().unwrap(),
            is_blocked: false,
            working_hours: Default::default(),
            time_slots: None,
            updated_by: ID::new(),
        }
    }

    #[actix_web::test]
    async fn stores_generated_slots_when_none_are_given() {
        let ctx = WrenchContext::create_inmemory();

        let mut usecase = usecase_for("2025-03-10");
        let availability = usecase.execute(&ctx).await.unwrap();
        assert_eq!(availability.time_slots.len(), 16);

        let stored = ctx
            .repos
            .availability_repo
            .find(&"2025-03-10".parse().unwrap())
            .await
            .unwrap();
        assert_eq!(stored.time_slots.len(), 16);
        assert!(stored.updated_by.is_some());
    }

    #[actix_web::test]
    async fn overwrites_existing_record() {
        let ctx = WrenchContext::create_inmemory();

        let mut usecase = usecase_for("2025-03-10");
        usecase.execute(&ctx).await.unwrap();

        let mut blocked = usecase_for("2025-03-10");
        blocked.is_blocked = true;
        blocked.execute(&ctx).await.unwrap();

        let stored = ctx
            .repos
            .availability_repo
            .find(&"2025-03-10".parse().unwrap())
            .await
            .unwrap();
        assert!(stored.is_blocked);
    }

    #[actix_web::test]
    async fn rejects_unordered_slots() {
        let ctx = WrenchContext::create_inmemory();

        let mut slots = generate_slots(&WorkingHours::default());
        slots.swap(0, 1);

        let mut usecase = usecase_for("2025-03-10");
        usecase.time_slots = Some(slots);

        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidSlotOrder)
        ));
        assert!(ctx
            .repos
            .availability_repo
            .find(&"2025-03-10".parse().unwrap())
            .await
            .is_none());
    }
}
