use actix_web::{web, HttpResponse};
use wrench_api_structs::get_status::APIResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Yo! We are up and running!".into(),
    })
}
