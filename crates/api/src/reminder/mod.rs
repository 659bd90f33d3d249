mod create_reminder;
mod delete_reminder;
mod get_service_reminders;
mod send_due_reminders;
mod update_reminder;

use actix_web::web;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_service_reminders::get_service_reminders_controller;
use send_due_reminders::send_due_reminders_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/reminders", web::post().to(create_reminder_controller));
    cfg.route(
        "/services/{service_id}/reminders",
        web::get().to(get_service_reminders_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
    cfg.route(
        "/reminders/send",
        web::post().to(send_due_reminders_controller),
    );
}
