use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{HttpRequest, HttpResponse, web};
use chrono::TimeZone;
use tracing::{error, warn};
use wrench_api_structs::send_due_reminders::APIResponse;
use wrench_infra::WrenchContext;

pub async fn send_due_reminders_controller(
    http_req: HttpRequest,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let usecase = SendDueRemindersUseCase;

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|report| {
            HttpResponse::Ok().json(APIResponse {
                attempted: report.attempted,
                succeeded: report.succeeded,
            })
        })
        .map_err(WrenchError::from)
}

/// One sweep over the due, unsent time based reminders. Invoked per
/// request, there is no background timer. Individual failures are
/// reported and skipped, the batch never aborts early.
#[derive(Debug)]
pub struct SendDueRemindersUseCase;

#[derive(Debug, PartialEq)]
pub struct SweepReport {
    pub attempted: usize,
    pub succeeded: usize,
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
impl UseCase for SendDueRemindersUseCase {
    type Response = SweepReport;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let due = ctx
            .repos
            .reminder_repo
            .find_due(now)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        let mut report = SweepReport {
            attempted: due.len(),
            succeeded: 0,
        };

        for reminder in due {
            let vehicle = match ctx.repos.vehicle_repo.find(&reminder.vehicle_id).await {
                Some(vehicle) => vehicle,
                None => {
                    warn!(
                        "Skipping reminder {}: its vehicle {} is gone",
                        reminder.id, reminder.vehicle_id
                    );
                    continue;
                }
            };
            let service = match ctx
                .repos
                .service_record_repo
                .find(&reminder.service_id)
                .await
            {
                Some(service) => service,
                None => {
                    warn!(
                        "Skipping reminder {}: its service {} is gone",
                        reminder.id, reminder.service_id
                    );
                    continue;
                }
            };

            let service_date = ctx
                .config
                .booking_utc_offset
                .timestamp_millis_opt(service.service_date)
                .single()
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| service.service_date.to_string());
            let subject = format!("Service reminder for your {}", vehicle.display_name());
            let plate = vehicle.license_plate.clone().unwrap_or_else(|| "-".into());
            let body = format!(
                "{}\n\nVehicle: {} ({})\nLast service: {} on {}\n",
                reminder.message,
                vehicle.display_name(),
                plate,
                service.service_type,
                service_date
            );

            match ctx.email.send(&reminder.email, &subject, &body).await {
                Ok(()) => {
                    report.succeeded += 1;
                    let mut sent_reminder = reminder.clone();
                    sent_reminder.sent = true;
                    sent_reminder.updated = now;
                    if let Err(e) = ctx.repos.reminder_repo.save(&sent_reminder).await {
                        error!(
                            "Unable to mark reminder {} as sent: {:?}",
                            sent_reminder.id, e
                        );
                    }
                }
                Err(e) => {
                    error!(
                        "Unable to deliver reminder {} to {}: {:?}",
                        reminder.id, reminder.email, e
                    );
                }
            }
        }

        Ok(report)
    }
}

impl PermissionBoundary for SendDueRemindersUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::SendReminders]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;
    use wrench_domain::{Customer, Reminder, ReminderType, ServiceRecord, ServiceStatus, Vehicle, ID};
    use wrench_infra::{FixedTimeSys, InMemoryEmailService};

    const NOW: i64 = 1_700_000_000_000;

    struct TestContext {
        ctx: WrenchContext,
        email: Arc<InMemoryEmailService>,
        vehicle: Vehicle,
        service: ServiceRecord,
    }

    async fn setup() -> TestContext {
        let email = Arc::new(InMemoryEmailService::new());
        let mut ctx = WrenchContext::create_inmemory();
        ctx.email = email.clone();
        ctx.sys = Arc::new(FixedTimeSys(NOW));

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
            mileage: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.vehicle_repo.insert(&vehicle).await.unwrap();
        let service = ServiceRecord {
            id: Default::default(),
            vehicle_id: vehicle.id.clone(),
            service_type: "Oil Change".into(),
            service_date: NOW - 1000,
            status: ServiceStatus::Completed,
            mileage: None,
            description: None,
            cost: None,
            technician_id: None,
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            created: 0,
            updated: 0,
        };
        ctx.repos
            .service_record_repo
            .insert(&service)
            .await
            .unwrap();

        TestContext {
            ctx,
            email,
            vehicle,
            service,
        }
    }

    fn due_reminder(t: &TestContext, email: &str) -> Reminder {
        Reminder {
            id: Default::default(),
            service_id: t.service.id.clone(),
            vehicle_id: t.vehicle.id.clone(),
            customer_id: ID::new(),
            reminder_type: ReminderType::Time,
            remind_at: Some(NOW - 1),
            mileage_threshold: None,
            message: "Your service is due".into(),
            email: email.into(),
            sent: false,
            created: 0,
            updated: 0,
        }
    }

    #[actix_web::test]
    async fn sweep_reports_partial_failure_on_missing_vehicle() {
        let t = setup().await;

        let first = due_reminder(&t, "one@example.com");
        let mut second = due_reminder(&t, "two@example.com");
        // second reminder points at a vehicle that no longer exists
        second.vehicle_id = ID::new();
        let third = due_reminder(&t, "three@example.com");

        for r in [&first, &second, &third] {
            t.ctx.repos.reminder_repo.insert(r).await.unwrap();
        }

        let mut usecase = SendDueRemindersUseCase;
        let report = usecase.execute(&t.ctx).await.unwrap();
        assert_eq!(
            report,
            SweepReport {
                attempted: 3,
                succeeded: 2
            }
        );

        assert!(t.ctx.repos.reminder_repo.find(&first.id).await.unwrap().sent);
        assert!(!t.ctx.repos.reminder_repo.find(&second.id).await.unwrap().sent);
        assert!(t.ctx.repos.reminder_repo.find(&third.id).await.unwrap().sent);
        assert_eq!(t.email.sent.lock().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn sweep_continues_past_delivery_failure() {
        let t = setup().await;
        t.email.fail_for("two@example.com");

        let first = due_reminder(&t, "one@example.com");
        let second = due_reminder(&t, "two@example.com");
        let third = due_reminder(&t, "three@example.com");
        for r in [&first, &second, &third] {
            t.ctx.repos.reminder_repo.insert(r).await.unwrap();
        }

        let mut usecase = SendDueRemindersUseCase;
        let report = usecase.execute(&t.ctx).await.unwrap();
        assert_eq!(
            report,
            SweepReport {
                attempted: 3,
                succeeded: 2
            }
        );
        assert!(!t.ctx.repos.reminder_repo.find(&second.id).await.unwrap().sent);
    }

    #[actix_web::test]
    async fn sweep_skips_future_sent_and_mileage_reminders() {
        let t = setup().await;

        let mut future = due_reminder(&t, "future@example.com");
        future.remind_at = Some(NOW + 60_000);
        let mut already_sent = due_reminder(&t, "sent@example.com");
        already_sent.sent = true;
        let mut mileage_only = due_reminder(&t, "mileage@example.com");
        mileage_only.reminder_type = ReminderType::Mileage;

        for r in [&future, &already_sent, &mileage_only] {
            t.ctx.repos.reminder_repo.insert(r).await.unwrap();
        }

        let mut usecase = SendDueRemindersUseCase;
        let report = usecase.execute(&t.ctx).await.unwrap();
        assert_eq!(
            report,
            SweepReport {
                attempted: 0,
                succeeded: 0
            }
        );
        assert!(t.email.sent.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn resent_after_explicit_unsent_edit() {
        let t = setup().await;

        let reminder = due_reminder(&t, "maria@example.com");
        t.ctx.repos.reminder_repo.insert(&reminder).await.unwrap();

        let mut usecase = SendDueRemindersUseCase;
        usecase.execute(&t.ctx).await.unwrap();
        assert!(t.ctx.repos.reminder_repo.find(&reminder.id).await.unwrap().sent);

        // an explicit edit may reset the flag, after which the sweep
        // picks the reminder up again
        let mut reset = t.ctx.repos.reminder_repo.find(&reminder.id).await.unwrap();
        reset.sent = false;
        t.ctx.repos.reminder_repo.save(&reset).await.unwrap();

        let mut usecase = SendDueRemindersUseCase;
        let report = usecase.execute(&t.ctx).await.unwrap();
        assert_eq!(
            report,
            SweepReport {
                attempted: 1,
                succeeded: 1
            }
        );
        assert_eq!(t.email.sent.lock().unwrap().len(), 2);
    }
}
