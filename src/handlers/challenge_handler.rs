use actix_web::{get, post, put, web, HttpRequest, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::{Persona, SessionEvent},
        dto::request::{ConfirmVideoRequest, SelectAnswerRequest, SkillApplicationRequest},
    },
};

#[get("/api/personas")]
async fn list_personas(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.challenge_service.list_personas())
}

#[get("/api/personas/{persona}")]
async fn get_persona(
    state: web::Data<AppState>,
    persona: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let persona: Persona = persona.parse()?;
    let overview = state.challenge_service.persona_overview(persona)?;
    Ok(HttpResponse::Ok().json(overview))
}

#[post("/api/personas/{persona}/sessions")]
async fn create_session(
    state: web::Data<AppState>,
    persona: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let persona: Persona = persona.parse()?;
    let view = state.challenge_service.create_session(persona).await?;
    Ok(HttpResponse::Created().json(view))
}

#[get("/api/sessions/{id}")]
async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let view = state.challenge_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/sessions/{id}/video")]
async fn confirm_video(
    state: web::Data<AppState>,
    req: HttpRequest,
    id: web::Path<Uuid>,
    request: web::Json<ConfirmVideoRequest>,
) -> Result<HttpResponse, AppError> {
    let event = SessionEvent::ConfirmVideo {
        confirmed: request.confirmed,
    };
    dispatch(&req, &state, &id, event).await
}

#[post("/api/sessions/{id}/start")]
async fn start_challenge(
    state: web::Data<AppState>,
    req: HttpRequest,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    dispatch(&req, &state, &id, SessionEvent::Start).await
}

#[put("/api/sessions/{id}/answers/{index}")]
async fn select_answer(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, usize)>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let (id, index) = path.into_inner();
    let event = SessionEvent::SelectAnswer {
        index,
        option: request.into_inner().option,
    };
    dispatch(&req, &state, &id, event).await
}

#[post("/api/sessions/{id}/submit")]
async fn submit_challenge(
    state: web::Data<AppState>,
    req: HttpRequest,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    dispatch(&req, &state, &id, SessionEvent::Submit).await
}

#[post("/api/sessions/{id}/retake")]
async fn retake_challenge(
    state: web::Data<AppState>,
    req: HttpRequest,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    dispatch(&req, &state, &id, SessionEvent::Retake).await
}

#[post("/api/sessions/{id}/skill-application")]
async fn record_skill_application(
    state: web::Data<AppState>,
    req: HttpRequest,
    id: web::Path<Uuid>,
    request: web::Json<SkillApplicationRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;
    let event = SessionEvent::RecordSkillApplication {
        choice: request.into_inner().choice,
    };
    dispatch(&req, &state, &id, event).await
}

async fn dispatch(
    req: &HttpRequest,
    state: &AppState,
    id: &Uuid,
    event: SessionEvent,
) -> Result<HttpResponse, AppError> {
    let view = state
        .challenge_service
        .dispatch(id, event)
        .await
        .map_err(|e| {
            log::warn!(
                "Session {} event failed [{}]: {}",
                id,
                get_request_id(req).unwrap_or_default(),
                e
            );
            e
        })?;
    Ok(HttpResponse::Ok().json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
        services::insight_service::MockInsightTransport,
        test_utils::test_helpers::assert_error_status,
    };
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::with_transport(Config::test_config(), Arc::new(MockInsightTransport::new()))
            .expect("state should build")
    }

    #[actix_web::test]
    async fn unknown_persona_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(get_persona),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/personas/astronaut")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn start_before_video_is_conflict() {
        let state = state();
        let session = state
            .challenge_service
            .create_session(Persona::SpreadsheetUser)
            .await
            .expect("create");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(start_challenge),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/start", session.id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn rejected_event_keeps_request_id() {
        let state = state();
        let session = state
            .challenge_service
            .create_session(Persona::Developer)
            .await
            .expect("create");
        let app = test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(state))
                .service(submit_challenge),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/sessions/{}/submit", session.id))
            .insert_header((REQUEST_ID_HEADER, "trace-42"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        assert_eq!(
            resp.headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
            Some("trace-42")
        );
    }

    #[actix_web::test]
    async fn empty_option_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(select_answer),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/sessions/{}/answers/0", Uuid::new_v4()))
            .set_json(serde_json::json!({ "option": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_session_id_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .service(get_session),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/sessions/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
    }
}
