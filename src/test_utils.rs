#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{persona::ChallengeProfile, ChallengeSession, SessionEvent};

    /// Session advanced to `AwaitingAnswers` for the challenge's persona.
    pub fn started_session(challenge: &ChallengeProfile) -> ChallengeSession {
        let mut session = ChallengeSession::new(challenge.persona);
        for event in [SessionEvent::ConfirmVideo { confirmed: true }, SessionEvent::Start] {
            session.state = session
                .state
                .reduce(&event, challenge)
                .expect("fixture transition should be legal");
        }
        session
    }

    /// Answer events selecting the correct option for the first `correct` questions
    /// and a wrong one for the rest.
    pub fn answer_events(challenge: &ChallengeProfile, correct: usize) -> Vec<SessionEvent> {
        challenge
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let option = if index < correct {
                    question.correct_answer.clone()
                } else {
                    question
                        .options
                        .iter()
                        .find(|o| **o != question.correct_answer)
                        .cloned()
                        .expect("every question has a wrong option")
                };
                SessionEvent::SelectAnswer { index, option }
            })
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use crate::{
        constants::question_banks::{CUSTOMER_CARE, SPREADSHEET_USER},
        models::domain::{SessionEvent, SessionPhase},
    };
    use actix_web::http::StatusCode;

    #[test]
    fn started_session_is_awaiting_answers() {
        let session = started_session(&CUSTOMER_CARE);
        assert_eq!(session.state.phase, SessionPhase::AwaitingAnswers);
    }

    #[test]
    fn answer_events_mix_correct_and_wrong() {
        let mut session = started_session(&SPREADSHEET_USER);
        for event in answer_events(&SPREADSHEET_USER, 5) {
            session.state = session.state.reduce(&event, &SPREADSHEET_USER).expect("answer");
        }
        session.state = session
            .state
            .reduce(&SessionEvent::Submit, &SPREADSHEET_USER)
            .expect("submit");

        let score = session.state.score(&SPREADSHEET_USER).expect("score");
        assert_eq!(score.correct_count, 5);
        assert_eq!(score.total, 7);
        assert!(score.passed);
    }

    #[test]
    fn status_helpers() {
        assert_error_status(StatusCode::CONFLICT);
        assert_success_status(StatusCode::CREATED);
    }
}
