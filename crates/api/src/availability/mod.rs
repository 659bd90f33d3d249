mod get_availability;
pub mod set_availability;
mod set_slot_availability;

use actix_web::web;
use get_availability::get_availability_controller;
use set_availability::set_availability_controller;
use set_slot_availability::set_slot_availability_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/availability/{date}",
        web::get().to(get_availability_controller),
    );
    cfg.route(
        "/availability/{date}",
        web::put().to(set_availability_controller),
    );
    cfg.route(
        "/availability/{date}/slots",
        web::put().to(set_slot_availability_controller),
    );
}
