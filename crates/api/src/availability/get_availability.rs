use crate::error::WrenchError;
use crate::shared::{
    auth::protect_route,
    guard::Guard,
    usecase::{execute, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::get_availability::*;
use wrench_domain::{Day, DayAvailability};
use wrench_infra::WrenchContext;

pub async fn get_availability_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let _ = protect_route(&http_req, &ctx)?;
    let day = Guard::against_malformed_date(&path_params.date)?;

    let usecase = GetAvailabilityUseCase { day };

    execute(usecase, &ctx)
        .await
        .map(|availability| HttpResponse::Ok().json(APIResponse::new(availability)))
}

#[derive(Debug)]
pub struct GetAvailabilityUseCase {
    pub day: Day,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAvailabilityUseCase {
    type Response = DayAvailability;

    type Errors = WrenchError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        // A day nothing was ever stored for reads as the open default
        Ok(ctx
            .repos
            .availability_repo
            .find(&self.day)
            .await
            .unwrap_or_else(|| DayAvailability::default_for(self.day)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[actix_web::test]
    async fn returns_default_record_for_unconfigured_day() {
        let ctx = WrenchContext::create_inmemory();
        let day: Day = "2025-03-10".parse().unwrap();

        let mut usecase = GetAvailabilityUseCase { day };
        let availability = usecase.execute(&ctx).await.unwrap();

        assert_eq!(availability.day, day);
        assert!(!availability.is_blocked);
        assert!(availability.time_slots.is_empty());
        assert_eq!(availability.working_hours.start.to_string(), "09:00");
        assert_eq!(availability.working_hours.end.to_string(), "17:00");
        assert_eq!(availability.working_hours.interval_minutes, 30);
    }
}
