use actix_web::web;

use crate::handlers::jobs;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/jobs")
            .service(jobs::upload_jobs)
            .service(jobs::create_job)
            .service(jobs::get_all_jobs)
            .service(jobs::get_job_by_id)
            .service(jobs::update_job)
            .service(jobs::delete_job),
    );
}
