pub mod challenge_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod manager_handler;

use actix_web::web;

pub use challenge_handler::{
    confirm_video, create_session, get_persona, get_session, list_personas,
    record_skill_application, retake_challenge, select_answer, start_challenge, submit_challenge,
};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use manager_handler::{create_page_load, list_sections, render_section};

/// Registers every REST and GraphQL route. Expects `AppState` and the GraphQL
/// `Schema` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(list_personas)
        .service(get_persona)
        .service(create_session)
        .service(get_session)
        .service(confirm_video)
        .service(start_challenge)
        .service(select_answer)
        .service(submit_challenge)
        .service(retake_challenge)
        .service(record_skill_application)
        .service(list_sections)
        .service(create_page_load)
        .service(render_section)
        .service(
            web::resource("/graphql")
                .route(web::post().to(graphql_handler::graphql))
                .route(web::get().to(graphql_handler::graphql)),
        )
        .service(web::resource("/graphiql").route(web::get().to(graphql_handler::graphiql)));
}
