use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{domain::ManagerSection, dto::request::SectionQuery},
};

#[get("/api/manager/sections")]
async fn list_sections(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.manager_service.sections())
}

#[post("/api/manager/pages")]
async fn create_page_load(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let page = state.manager_service.create_page_load().await?;
    Ok(HttpResponse::Created().json(page))
}

#[get("/api/manager/pages/{id}/sections/{section}")]
async fn render_section(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    query: web::Query<SectionQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;
    let (page_id, section) = path.into_inner();
    let section: ManagerSection = section.parse()?;

    let view = state
        .manager_service
        .render_section(&page_id, section, query.member.as_deref())
        .await?;
    Ok(HttpResponse::Ok().json(view))
}
