use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    guard::Guard,
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::set_slot_availability::*;
use wrench_domain::{Day, DayAvailability, SlotTime, ID};
use wrench_infra::WrenchContext;

pub async fn set_slot_availability_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (principal, policy) = protect_route(&http_req, &ctx)?;

    let day = Guard::against_malformed_date(&path_params.date)?;
    let time = Guard::against_malformed_time(&body.time)?;

    let usecase = SetSlotAvailabilityUseCase {
        day,
        time,
        available: body.available,
        updated_by: principal.user_id,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|availability| HttpResponse::Ok().json(APIResponse::new(availability)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct SetSlotAvailabilityUseCase {
    pub day: Day,
    pub time: SlotTime,
    pub available: bool,
    pub updated_by: ID,
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
impl UseCase for SetSlotAvailabilityUseCase {
    type Response = DayAvailability;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let repo = &ctx.repos.availability_repo;

        // First write for a day creates its record lazily
        if repo.find(&self.day).await.is_none() {
            let mut fresh = DayAvailability::default_for(self.day);
            fresh.updated = ctx.sys.get_timestamp_millis();
            fresh.updated_by = Some(self.updated_by.clone());
            repo.upsert(&fresh)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
        }

        // An unmatched time leaves the slot list untouched. That is the
        // contract: no error and no new slot is appended.
        let _matched = repo
            .set_slot_available(&self.day, self.time, self.available)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        repo.find(&self.day)
            .await
            .ok_or(UseCaseError::StorageError)
    }
}

impl PermissionBoundary for SetSlotAvailabilityUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::ManageAvailability]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::availability::set_availability::SetAvailabilityUseCase;

    async fn seed_day(ctx: &WrenchContext, day: &str) {
        let mut seed = SetAvailabilityUseCase {
            day: day.parse().unwrap(),
            is_blocked: false,
            working_hours: Default::default(),
            time_slots: None,
            updated_by: ID::new(),
        };
        seed.execute(ctx).await.unwrap();
    }

    #[actix_web::test]
    async fn flips_a_single_slot() {
        let ctx = WrenchContext::create_inmemory();
        seed_day(&ctx, "2025-03-10").await;

        let mut usecase = SetSlotAvailabilityUseCase {
            day: "2025-03-10".parse().unwrap(),
            time: "10:00".parse().unwrap(),
            available: false,
            updated_by: ID::new(),
        };
        let availability = usecase.execute(&ctx).await.unwrap();

        let flipped = availability.slot("10:00".parse().unwrap()).unwrap();
        assert!(!flipped.available);
        let untouched = availability
            .time_slots
            .iter()
            .filter(|s| s.time.to_string() != "10:00")
            .all(|s| s.available);
        assert!(untouched);
    }

    #[actix_web::test]
    async fn unmatched_time_leaves_slots_unchanged() {
        let ctx = WrenchContext::create_inmemory();
        seed_day(&ctx, "2025-03-10").await;

        let before = ctx
            .repos
            .availability_repo
            .find(&"2025-03-10".parse().unwrap())
            .await
            .unwrap();

        let mut usecase = SetSlotAvailabilityUseCase {
            day: "2025-03-10".parse().unwrap(),
            // not on the 30 minute grid
            time: "10:10".parse().unwrap(),
            available: true,
            updated_by: ID::new(),
        };
        let availability = usecase.execute(&ctx).await.unwrap();

        assert_eq!(availability.time_slots, before.time_slots);
    }

    #[actix_web::test]
    async fn lazily_creates_record_for_unknown_day() {
        let ctx = WrenchContext::create_inmemory();

        let mut usecase = SetSlotAvailabilityUseCase {
            day: "2025-04-01".parse().unwrap(),
            time: "09:00".parse().unwrap(),
            available: false,
            updated_by: ID::new(),
        };
        let availability = usecase.execute(&ctx).await.unwrap();

        // fresh record has no slots, so the toggle was a no-op
        assert!(availability.time_slots.is_empty());
        assert!(ctx
            .repos
            .availability_repo
            .find(&"2025-04-01".parse().unwrap())
            .await
            .is_some());
    }
}
