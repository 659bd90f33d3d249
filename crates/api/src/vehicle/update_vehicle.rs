use crate::error::WrenchError;
use crate::shared::{
    auth::{protect_route, Permission},
    usecase::{execute_with_policy, PermissionBoundary, UseCase},
};
use actix_web::{web, HttpRequest, HttpResponse};
use wrench_api_structs::update_vehicle::*;
use wrench_domain::{Vehicle, ID};
use wrench_infra::WrenchContext;

pub async fn update_vehicle_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<WrenchContext>,
) -> Result<HttpResponse, WrenchError> {
    let (_, policy) = protect_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateVehicleUseCase {
        vehicle_id: path_params.vehicle_id.clone(),
        make: body.make,
        model: body.model,
        year: body.year,
        license_plate: body.license_plate,
        vin: body.vin,
        mileage: body.mileage,
    };

    execute_with_policy(usecase, &policy, &ctx)
        .await
        .map(|vehicle| HttpResponse::Ok().json(APIResponse::new(vehicle)))
        .map_err(WrenchError::from)
}

#[derive(Debug)]
pub struct UpdateVehicleUseCase {
    pub vehicle_id: ID,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub mileage: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for WrenchError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(vehicle_id) => Self::NotFound(format!(
                "The vehicle with id: {}, was not found.",
                vehicle_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateVehicleUseCase {
    type Response = Vehicle;

    type Errors = UseCaseError;

    async fn execute(&mut self, ctx: &WrenchContext) -> Result<Self::Response, Self::Errors> {
        let mut vehicle = match ctx.repos.vehicle_repo.find(&self.vehicle_id).await {
            Some(vehicle) => vehicle,
            None => return Err(UseCaseError::NotFound(self.vehicle_id.clone())),
        };

        if let Some(make) = &self.make {
            vehicle.make = make.clone();
        }
        if let Some(model) = &self.model {
            vehicle.model = model.clone();
        }
        if let Some(year) = self.year {
            vehicle.year = year;
        }
        if let Some(license_plate) = &self.license_plate {
            vehicle.license_plate = Some(license_plate.clone());
        }
        if let Some(vin) = &self.vin {
            vehicle.vin = Some(vin.clone());
        }
        if let Some(mileage) = self.mileage {
            vehicle.mileage = Some(mileage);
        }
        vehicle.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .vehicle_repo
            .save(&vehicle)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(vehicle)
    }
}

impl PermissionBoundary for UpdateVehicleUseCase {
    fn permissions(&self) -> Vec<Permission> {
        vec![Permission::UpdateVehicle]
    }
}
