use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{persona::ChallengeProfile, ChallengeSession, Persona, SessionEvent},
        dto::response::{PersonaOverview, PersonaSummary, SessionView},
    },
    repositories::SessionRepository,
};

pub struct ChallengeService {
    repository: Arc<dyn SessionRepository>,
    progress_step_millis: u64,
    // Held across the read-reduce-write of every dispatch.
    dispatch_lock: Mutex<()>,
}

impl ChallengeService {
    pub fn new(repository: Arc<dyn SessionRepository>, progress_step_millis: u64) -> Self {
        Self {
            repository,
            progress_step_millis,
            dispatch_lock: Mutex::new(()),
        }
    }

    pub fn list_personas(&self) -> Vec<PersonaSummary> {
        Persona::ALL.into_iter().map(PersonaSummary::from).collect()
    }

    pub fn persona_overview(&self, persona: Persona) -> AppResult<PersonaOverview> {
        Ok(PersonaOverview::from(challenge_for(persona)?))
    }

    pub async fn create_session(&self, persona: Persona) -> AppResult<SessionView> {
        let challenge = challenge_for(persona)?;
        let session = self
            .repository
            .create(ChallengeSession::new(persona))
            .await?;

        log::info!("Created {} session {}", persona, session.id);
        Ok(self.render(&session, challenge))
    }

    pub async fn get_session(&self, id: &Uuid) -> AppResult<SessionView> {
        let session = self.find_session(id).await?;
        let challenge = challenge_for(session.persona)?;
        Ok(self.render(&session, challenge))
    }

    /// Applies one learner event and returns the re-rendered session.
    pub async fn dispatch(&self, id: &Uuid, event: SessionEvent) -> AppResult<SessionView> {
        let _guard = self.dispatch_lock.lock().await;

        let mut session = self.find_session(id).await?;
        let challenge = challenge_for(session.persona)?;

        let next = session.state.reduce(&event, challenge).map_err(|e| {
            log::debug!("Rejected {:?} for session {}", event, id);
            e
        })?;

        log::info!(
            "Session {} moved {:?} -> {:?}",
            id,
            session.state.phase,
            next.phase
        );
        session.state = next;
        session.modified_at = Utc::now();

        let session = self.repository.update(session).await?;
        Ok(self.render(&session, challenge))
    }

    async fn find_session(&self, id: &Uuid) -> AppResult<ChallengeSession> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Session with id '{}' not found", id)))
    }

    fn render(&self, session: &ChallengeSession, challenge: &ChallengeProfile) -> SessionView {
        SessionView::render(session, challenge, self.progress_step_millis)
    }
}

fn challenge_for(persona: Persona) -> AppResult<&'static ChallengeProfile> {
    persona.challenge().ok_or_else(|| {
        AppError::NotFound(format!(
            "Persona '{}' has no challenge; use the manager dashboard",
            persona
        ))
    })
}
