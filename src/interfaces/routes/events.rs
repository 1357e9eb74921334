use actix_web::web;

use crate::handlers::events;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .service(events::upload_events)
            .service(events::create_event)
            .service(events::get_all_events)
            .service(events::get_event_by_id)
            .service(events::update_event)
            .service(events::delete_event),
    );
}
