use async_graphql::{Context, Object, ID};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    graphql::helpers::{gql, parse_id},
    models::{
        domain::{Persona, SessionEvent},
        dto::{
            request::{ConfirmVideoRequest, SelectAnswerRequest, SkillApplicationRequest},
            response::SessionView,
        },
    },
};

pub struct MutationRoot;

async fn dispatch(ctx: &Context<'_>, id: &str, event: SessionEvent) -> AppResult<SessionView> {
    let state = ctx.data::<AppState>()?;
    let id = parse_id(id)?;
    state.challenge_service.dispatch(&id, event).await
}

#[Object]
impl MutationRoot {
    async fn create_session(
        &self,
        ctx: &Context<'_>,
        persona: Persona,
    ) -> async_graphql::Result<SessionView> {
        let state = ctx.data::<AppState>()?;
        gql(state.challenge_service.create_session(persona).await)
    }

    async fn confirm_video(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
        input: ConfirmVideoRequest,
    ) -> async_graphql::Result<SessionView> {
        let event = SessionEvent::ConfirmVideo {
            confirmed: input.confirmed,
        };
        gql(dispatch(ctx, &session_id, event).await)
    }

    async fn start_challenge(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
    ) -> async_graphql::Result<SessionView> {
        gql(dispatch(ctx, &session_id, SessionEvent::Start).await)
    }

    async fn select_answer(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
        index: u32,
        input: SelectAnswerRequest,
    ) -> async_graphql::Result<SessionView> {
        gql(input.validate().map_err(Into::into))?;
        let event = SessionEvent::SelectAnswer {
            index: index as usize,
            option: input.option,
        };
        gql(dispatch(ctx, &session_id, event).await)
    }

    async fn submit_challenge(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
    ) -> async_graphql::Result<SessionView> {
        gql(dispatch(ctx, &session_id, SessionEvent::Submit).await)
    }

    async fn retake_challenge(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
    ) -> async_graphql::Result<SessionView> {
        gql(dispatch(ctx, &session_id, SessionEvent::Retake).await)
    }

    async fn record_skill_application(
        &self,
        ctx: &Context<'_>,
        session_id: ID,
        input: SkillApplicationRequest,
    ) -> async_graphql::Result<SessionView> {
        gql(input.validate().map_err(Into::into))?;
        let event = SessionEvent::RecordSkillApplication {
            choice: input.choice,
        };
        gql(dispatch(ctx, &session_id, event).await)
    }
}
