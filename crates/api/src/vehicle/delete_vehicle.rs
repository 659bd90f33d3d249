use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::error;
use wrench_api_structs::delete_vehicle::*;
use wrench_domain::{Vehicle, ID};
use wrench_infra::WrenchContext;

pub async fn delete_vehicle_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let usecase = DeleteVehicleUseCase {
        vehicle_id: path_params.vehicle_id.clone(),
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|vehicle| HttpResponse::Ok().json(APIResponse::new(vehicle)))
        .map_err(WrenchError::from)
}

/// Deletes a vehicle and cascades to its service records and reminders
#[derive(Debug)]
pub struct DeleteVehicleUseCase {
    pub vehicle_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteVehicleUseCase {
    type Response = Vehicle;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let vehicle = match ctx.repos.vehicle_repo.delete(&self.vehicle_id).await {
            Some(vehicle) => vehicle,
            None => return Err(UseCaseError::NotFound(self.vehicle_id.clone())),
        };

        if let Err(e) = ctx
            .repos
            .service_record_repo
            .delete_by_vehicle(&self.vehicle_id)
            .await
        {
            error!(
                "Unable to delete services of vehicle {}: {:?}",
                self.vehicle_id, e
            );
        }
        if let Err(e) = ctx
            .repos
            .reminder_repo
            .delete_by_vehicle(&self.vehicle_id)
            .await
        {
            error!(
                "Unable to delete reminders of vehicle {}: {:?}",
                self.vehicle_id, e
            );
        }

        Ok(vehicle)
    }
}

impl PermissionBoundary for DeleteVehicleUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::DeleteVehicle]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wrench_domain::{Customer, ServiceRecord, ServiceStatus};

    #[actix_web::test]
    async fn cascades_to_services() {
        let ctx = WrenchContext::create_inmemory();

        let customer = Customer {
            id: Default::default(),
            name: "Jonas Berg".into(),
            email: "jonas@example.com".into(),
            phone: None,
            created: 0,
            updated: 0,
        };
        ctx.repos.customer_repo.insert(&customer).await.unwrap();
        let vehicle = Vehicle {
            id: Default::default(),
            customer_id: customer.id.clone(),
            make: "Saab".into(),
            model: "900".into(),
            year: 1996,
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

        let mut usecase = DeleteVehicleUseCase {
            vehicle_id: vehicle.id.clone(),
        };
        usecase.execute(&ctx).await.unwrap();

        assert!(ctx.repos.vehicle_repo.find(&vehicle.id).await.is_none());
        assert!(ctx
            .repos
            .service_record_repo
            .find(&service.id)
            .await
            .is_none());
        // the customer itself is untouched
        assert!(ctx.repos.customer_repo.find(&customer.id).await.is_some());
    }
}
