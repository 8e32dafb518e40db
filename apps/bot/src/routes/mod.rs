pub mod health;

use actix_web::web;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    health::configure_routes(cfg);
}
