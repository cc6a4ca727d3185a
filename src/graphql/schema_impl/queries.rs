use async_graphql::{Context, Object, ID};

use crate::{
    app_state::AppState,
    graphql::helpers::{gql, parse_id},
    models::{
        domain::Persona,
        dto::{
            dashboard_dto::SectionNavView,
            response::{PersonaOverview, PersonaSummary, SessionView},
        },
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn personas(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<PersonaSummary>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.challenge_service.list_personas())
    }

    async fn persona(
        &self,
        ctx: &Context<'_>,
        persona: Persona,
    ) -> async_graphql::Result<PersonaOverview> {
        let state = ctx.data::<AppState>()?;
        gql(state.challenge_service.persona_overview(persona))
    }

    async fn session(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<SessionView> {
        let state = ctx.data::<AppState>()?;
        let id = gql(parse_id(&id))?;
        gql(state.challenge_service.get_session(&id).await)
    }

    async fn manager_sections(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Vec<SectionNavView>> {
        let state = ctx.data::<AppState>()?;
        Ok(state.manager_service.sections())
    }
}
