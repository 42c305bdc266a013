// Route exports
pub mod moods;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(moods::configure);
}
