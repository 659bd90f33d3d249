mod create_vehicle;
mod delete_vehicle;
mod get_customer_vehicles;
mod get_vehicle;
mod update_vehicle;

use actix_web::web;
use create_vehicle::create_vehicle_controller;
use delete_vehicle::delete_vehicle_controller;
use get_customer_vehicles::get_customer_vehicles_controller;
use get_vehicle::get_vehicle_controller;
use update_vehicle::update_vehicle_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/vehicles", web::post().to(create_vehicle_controller));
    cfg.route(
        "/vehicles/{vehicle_id}",
        web::get().to(get_vehicle_controller),
    );
    cfg.route(
        "/customers/{customer_id}/vehicles",
        web::get().to(get_customer_vehicles_controller),
    );
    cfg.route(
        "/vehicles/{vehicle_id}",
        web::put().to(update_vehicle_controller),
    );
    cfg.route(
        "/vehicles/{vehicle_id}",
        web::delete().to(delete_vehicle_controller),
    );
}
