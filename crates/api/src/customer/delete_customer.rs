use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::error;
use wrench_api_structs::delete_customer::*;
use wrench_domain::{Customer, ID};
use wrench_infra::WrenchContext;

pub async fn delete_customer_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let usecase = DeleteCustomerUseCase {
        customer_id: path_params.customer_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|customer| HttpResponse::Ok().json(APIResponse::new(customer)))
        .map_err(WrenchError::from)
}

/// Deletes a customer and cascades through its vehicles, their service
/// records and every reminder hanging off them.
#[derive(Debug)]
pub struct DeleteCustomerUseCase {
    pub customer_id: ID,
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
impl UseCase for DeleteCustomerUseCase {
    type Response = Customer;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let customer = match ctx.repos.customer_repo.delete(&self.customer_id).await {
            Some(customer) => customer,
            None => return Err(UseCaseError::NotFound(self.customer_id.clone())),
        };

        let vehicles = ctx
            .repos
            .vehicle_repo
            .find_by_customer(&self.customer_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;
        for vehicle in &vehicles {
            if let Err(e) = ctx
                .repos
                .service_record_repo
                .delete_by_vehicle(&vehicle.id)
                .await
            {
                error!("Unable to delete services of vehicle {}: {:?}", vehicle.id, e);
            }
        }
        if let Err(e) = ctx
            .repos
            .vehicle_repo
            .delete_by_customer(&self.customer_id)
            .await
        {
            error!(
                "Unable to delete vehicles of customer {}: {:?}",
                self.customer_id, e
            );
        }
        if let Err(e) = ctx
            .repos
            .reminder_repo
            .delete_by_customer(&self.customer_id)
            .await
        {
            error!(
                "Unable to delete reminders of customer {}: {:?}",
                self.customer_id, e
            );
        }

        Ok(customer)
    }
}

impl PermissionBoundary for DeleteCustomerUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteCustomer]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wrench_domain::{Reminder, ReminderType, ServiceRecord, ServiceStatus, Vehicle};

    #[actix_web::test]
    async fn cascades_to_vehicles_services_and_reminders() {
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
            license_plate: None,
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
            service_date: 0,
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
        ctx.repos.service_record_repo.insert(&service).await.unwrap();
        let reminder = Reminder {
            id: Default::default(),
            service_id: service.id.clone(),
            vehicle_id: vehicle.id.clone(),
            customer_id: customer.id.clone(),
            reminder_type: ReminderType::Time,
            remind_at: Some(0),
            mileage_threshold: None,
            message: "Due".into(),
            email: customer.email.clone(),
            sent: false,
            created: 0,
            updated: 0,
        };
        ctx.repos.reminder_repo.insert(&reminder).await.unwrap();

        let mut usecase = DeleteCustomerUseCase {
            customer_id: customer.id.clone(),
        };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx.repos.customer_repo.find(&customer.id).await.is_none());
        assert!(ctx.repos.vehicle_repo.find(&vehicle.id).await.is_none());
        assert!(ctx
            .repos
            .service_record_repo
            .find(&service.id)
            .await
            .is_none());
        assert!(ctx.repos.reminder_repo.find(&reminder.id).await.is_none());
    }
}
