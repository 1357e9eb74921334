use actix_web::web;

use crate::handlers::alumni;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/alumni")
            .service(alumni::upload_alumni)
            .service(alumni::create_alumni)
            .service(alumni::get_all_alumni)
            .service(alumni::get_alumni_by_id)
            .service(alumni::update_alumni)
            .service(alumni::delete_alumni),
    );
}
