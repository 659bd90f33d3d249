use super::schedule_service::ScheduleServiceUseCase;
use crate::shared::usecase::Subscriber;
use tracing::error;
use wrench_domain::{Reminder, ReminderType, ServiceRecord};
use wrench_infra::WrenchContext;

const ONE_DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Every booked service gets a follow up `Reminder` one day ahead of the
/// appointment, addressed to the contact captured at booking time.
pub struct CreateReminderOnServiceScheduled;

#[async_trait::async_trait(?Send)]
impl Subscriber<ScheduleServiceUseCase> for CreateReminderOnServiceScheduled {
    async fn notify(&self, record: &ServiceRecord, ctx: &WrenchContext) {
        let vehicle = match ctx.repos.vehicle_repo.find(&record.vehicle_id).await {
            Some(vehicle) => vehicle,
            None => return,
        };

        let now = ctx.sys.get_timestamp_millis();
        let reminder = Reminder {
            id: Default::default(),
            service_id: record.id.clone(),
            vehicle_id: record.vehicle_id.clone(),
            customer_id: vehicle.customer_id.clone(),
            reminder_type: ReminderType::Time,
            remind_at: Some(record.service_date - ONE_DAY_MILLIS),
            mileage_threshold: None,
            message: format!(
                "Upcoming {} for your {}",
                record.service_type,
                vehicle.display_name()
            ),
            email: record.customer_email.clone(),
            sent: false,
            created: now,
            updated: now,
        };

        if let Err(e) = ctx.repos.reminder_repo.insert(&reminder).await {
            error!("Unable to create booking reminder: {:?}", e);
        }
    }
}
