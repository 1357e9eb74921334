use actix_web::web;

use crate::handlers::home::home;
use crate::handlers::system::admin_health_check;

mod alumni;
mod auth;
mod events;
mod jobs;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(auth::config_routes)
            .configure(alumni::config_routes)
            .configure(jobs::config_routes)
            .configure(events::config_routes),
    );

    cfg.service(web::scope("/admin").service(admin_health_check));

    cfg.configure(json_error::config_routes);
}
