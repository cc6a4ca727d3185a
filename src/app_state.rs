use std::sync::Arc;

use crate::{
    config::Config,
    constants::question_banks::all_challenges,
    errors::AppResult,
    models::domain::question::validate_bank,
    repositories::{InMemorySessionRepository, InMemoryTeamSnapshotRepository},
    services::{
        challenge_service::ChallengeService,
        insight_service::{InsightService, InsightTransport, WatsonxTransport},
        manager_service::ManagerService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub challenge_service: Arc<ChallengeService>,
    pub manager_service: Arc<ManagerService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let transport = Arc::new(WatsonxTransport::new(reqwest::Client::new(), &config));
        Self::with_transport(config, transport)
    }

    /// Builds the state around a given insight transport. Fails if any
    /// question bank is malformed.
    pub fn with_transport(config: Config, transport: Arc<dyn InsightTransport>) -> AppResult<Self> {
        validate_question_banks()?;

        let session_repository = Arc::new(InMemorySessionRepository::new());
        let challenge_service = Arc::new(ChallengeService::new(
            session_repository,
            config.progress_step_millis,
        ));

        let insight_service = Arc::new(InsightService::new(transport, &config));
        let snapshot_repository = Arc::new(InMemoryTeamSnapshotRepository::new());
        let manager_service = Arc::new(ManagerService::new(snapshot_repository, insight_service));

        Ok(Self {
            challenge_service,
            manager_service,
            config: Arc::new(config),
        })
    }
}

pub fn validate_question_banks() -> AppResult<()> {
    for challenge in all_challenges() {
        validate_bank(&challenge.questions)?;
    }
    Ok(())
}
