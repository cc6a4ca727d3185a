use std::collections::BTreeMap;

use async_graphql::Enum;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{
        persona::{ChallengeProfile, Persona, RetakePolicy},
        score::{score, ScoreResult},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    NotStarted,
    AwaitingAnswers,
    Submitted,
}

/// Learner input, applied one at a time through [`SessionState::reduce`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    ConfirmVideo { confirmed: bool },
    Start,
    SelectAnswer { index: usize, option: String },
    Submit,
    Retake,
    RecordSkillApplication { choice: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub video_confirmed: bool,
    pub answers: BTreeMap<usize, String>,
    pub skill_application: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            phase: SessionPhase::NotStarted,
            video_confirmed: false,
            answers: BTreeMap::new(),
            skill_application: None,
        }
    }
}

impl SessionState {
    pub fn is_started(&self) -> bool {
        self.phase != SessionPhase::NotStarted
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SessionPhase::Submitted
    }

    /// Computes the next state without touching `self`.
    pub fn reduce(&self, event: &SessionEvent, challenge: &ChallengeProfile) -> AppResult<Self> {
        let mut next = self.clone();
        match event {
            SessionEvent::ConfirmVideo { confirmed } => next.confirm_video(*confirmed)?,
            SessionEvent::Start => next.start()?,
            SessionEvent::SelectAnswer { index, option } => {
                next.select_answer(challenge, *index, option)?
            }
            SessionEvent::Submit => next.submit()?,
            SessionEvent::Retake => next.retake(challenge.retake_policy)?,
            SessionEvent::RecordSkillApplication { choice } => {
                next.record_skill_application(challenge, choice)?
            }
        }
        Ok(next)
    }

    pub fn confirm_video(&mut self, confirmed: bool) -> AppResult<()> {
        self.expect_phase(SessionPhase::NotStarted, "confirm the video")?;
        self.video_confirmed = confirmed;
        Ok(())
    }

    pub fn start(&mut self) -> AppResult<()> {
        self.expect_phase(SessionPhase::NotStarted, "start the challenge")?;
        if !self.video_confirmed {
            return Err(AppError::InvalidTransition(
                "Watch the video and confirm it before starting the challenge".to_string(),
            ));
        }
        self.phase = SessionPhase::AwaitingAnswers;
        Ok(())
    }

    /// Overwrites any previous answer for `index`.
    pub fn select_answer(
        &mut self,
        challenge: &ChallengeProfile,
        index: usize,
        option: &str,
    ) -> AppResult<()> {
        self.expect_phase(SessionPhase::AwaitingAnswers, "answer a question")?;
        let question = challenge.question(index).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Question index {} is out of range (0..{})",
                index,
                challenge.questions.len()
            ))
        })?;
        if !question.has_option(option) {
            return Err(AppError::ValidationError(format!(
                "'{}' is not an option of question {}",
                option,
                index + 1
            )));
        }
        self.answers.insert(index, option.to_string());
        Ok(())
    }

    pub fn submit(&mut self) -> AppResult<()> {
        self.expect_phase(SessionPhase::AwaitingAnswers, "submit answers")?;
        self.phase = SessionPhase::Submitted;
        Ok(())
    }

    pub fn retake(&mut self, policy: RetakePolicy) -> AppResult<()> {
        self.expect_phase(SessionPhase::Submitted, "retake the challenge")?;
        self.phase = SessionPhase::NotStarted;
        self.answers.clear();
        self.skill_application = None;
        if policy == RetakePolicy::RequireVideoAgain {
            self.video_confirmed = false;
        }
        Ok(())
    }

    pub fn record_skill_application(
        &mut self,
        challenge: &ChallengeProfile,
        choice: &str,
    ) -> AppResult<()> {
        self.expect_phase(SessionPhase::Submitted, "record skill application")?;
        if challenge.skill_application_response(choice).is_none() {
            return Err(AppError::ValidationError(format!(
                "'{}' is not a valid skill application choice",
                choice
            )));
        }
        self.skill_application = Some(choice.to_string());
        Ok(())
    }

    /// Score for a submitted session; `None` until submission.
    pub fn score(&self, challenge: &ChallengeProfile) -> Option<ScoreResult> {
        self.is_submitted()
            .then(|| score(&challenge.questions, &self.answers, challenge.pass_threshold))
    }

    fn expect_phase(&self, expected: SessionPhase, action: &str) -> AppResult<()> {
        if self.phase != expected {
            return Err(AppError::InvalidTransition(format!(
                "Cannot {} while the session is {:?}",
                action, self.phase
            )));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChallengeSession {
    pub id: Uuid,
    pub persona: Persona,
    pub state: SessionState,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl ChallengeSession {
    pub fn new(persona: Persona) -> Self {
        let now = Utc::now();
        ChallengeSession {
            id: Uuid::new_v4(),
            persona,
            state: SessionState::default(),
            created_at: now,
            modified_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::question_banks::{CUSTOMER_CARE, DEVELOPER, SPREADSHEET_USER};

    fn started() -> SessionState {
        let mut state = SessionState::default();
        state.confirm_video(true).expect("video gate");
        state.start().expect("start");
        state
    }

    fn answer_all_correctly(state: &mut SessionState, challenge: &ChallengeProfile) {
        for (i, q) in challenge.questions.iter().enumerate() {
            state
                .select_answer(challenge, i, &q.correct_answer)
                .expect("answer");
        }
    }

    #[test]
    fn start_requires_confirmed_video() {
        let mut state = SessionState::default();

        let err = state.start().unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
        assert_eq!(state.phase, SessionPhase::NotStarted);
    }

    #[test]
    fn submit_requires_started_session() {
        let mut state = SessionState::default();

        assert!(state.submit().is_err());
        assert!(!state.is_submitted());
    }

    #[test]
    fn answer_overwrite_replaces_previous_value() {
        let challenge = &*CUSTOMER_CARE;
        let mut state = started();

        state
            .select_answer(challenge, 0, "A. Interrupt them")
            .expect("first answer");
        state
            .select_answer(challenge, 0, "B. Listen actively")
            .expect("second answer");

        assert_eq!(state.answers.len(), 1);
        assert_eq!(state.answers.get(&0).map(String::as_str), Some("B. Listen actively"));
    }

    #[test]
    fn answer_must_be_an_option_of_its_question() {
        let challenge = &*CUSTOMER_CARE;
        let mut state = started();

        let err = state
            .select_answer(challenge, 0, "B. VLOOKUP")
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = state
            .select_answer(challenge, 5, "B. Listen actively")
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
        assert!(state.answers.is_empty());
    }

    #[test]
    fn answers_are_rejected_after_submission() {
        let challenge = &*CUSTOMER_CARE;
        let mut state = started();
        state.submit().expect("submit");

        let err = state
            .select_answer(challenge, 0, "B. Listen actively")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidTransition(_)));
    }

    #[test]
    fn score_is_only_available_once_submitted() {
        let challenge = &*SPREADSHEET_USER;
        let mut state = started();
        answer_all_correctly(&mut state, challenge);

        assert!(state.score(challenge).is_none());
        state.submit().expect("submit");

        let result = state.score(challenge).expect("score after submit");
        assert_eq!(result.correct_count, 7);
        assert!(result.passed);
    }

    #[test]
    fn retake_keeps_video_gate_when_policy_says_so() {
        let challenge = &*CUSTOMER_CARE;
        let mut state = started();
        answer_all_correctly(&mut state, challenge);
        state.submit().expect("submit");

        state.retake(challenge.retake_policy).expect("retake");

        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert!(state.answers.is_empty());
        assert!(state.video_confirmed);
        assert!(state.start().is_ok());
    }

    #[test]
    fn retake_resets_video_gate_for_developer() {
        let challenge = &*DEVELOPER;
        let mut state = started();
        state.submit().expect("submit");

        state.retake(challenge.retake_policy).expect("retake");

        assert!(!state.video_confirmed);
        assert!(state.start().is_err());
    }

    #[test]
    fn retake_is_only_allowed_after_submission() {
        let mut state = started();

        assert!(state.retake(RetakePolicy::KeepVideoConfirmation).is_err());
        assert_eq!(state.phase, SessionPhase::AwaitingAnswers);
    }

    #[test]
    fn reduce_leaves_original_state_untouched_on_error() {
        let challenge = &*CUSTOMER_CARE;
        let state = SessionState::default();

        assert!(state.reduce(&SessionEvent::Submit, challenge).is_err());
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn reduce_walks_the_full_lifecycle() {
        let challenge = &*CUSTOMER_CARE;
        let events = vec![
            SessionEvent::ConfirmVideo { confirmed: true },
            SessionEvent::Start,
            SessionEvent::SelectAnswer {
                index: 0,
                option: "B. Listen actively".to_string(),
            },
            SessionEvent::Submit,
            SessionEvent::RecordSkillApplication {
                choice: "Yes".to_string(),
            },
        ];

        let state = events
            .iter()
            .try_fold(SessionState::default(), |state, event| state.reduce(event, challenge))
            .expect("lifecycle should succeed");

        assert!(state.is_submitted());
        assert_eq!(state.skill_application.as_deref(), Some("Yes"));
        assert_eq!(state.score(challenge).map(|s| s.correct_count), Some(1));

        let state = state
            .reduce(&SessionEvent::Retake, challenge)
            .expect("retake");
        assert!(state.skill_application.is_none());
    }

    #[test]
    fn session_event_deserializes_from_tagged_json() {
        let event: SessionEvent =
            serde_json::from_str(r#"{"type":"select_answer","index":2,"option":"C. Right away"}"#)
                .expect("event should deserialize");

        assert_eq!(
            event,
            SessionEvent::SelectAnswer {
                index: 2,
                option: "C. Right away".to_string()
            }
        );
    }
}
