use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::models::domain::{persona::ChallengeProfile, SessionPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStage {
    /// Shown while the "generate challenge" action runs.
    Generating,
    /// Shown above the quiz once it has started.
    Initializing,
}

/// A status label the client displays in sequence. Nothing waits on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStep {
    pub stage: ProgressStage,
    pub position: usize,
    pub label: String,
    pub fraction: f64,
}

impl ProgressStep {
    pub fn new(stage: ProgressStage, label: impl Into<String>) -> Self {
        Self {
            stage,
            position: 1,
            label: label.into(),
            fraction: 1.0,
        }
    }

    pub fn at(mut self, position: usize, of: usize) -> Self {
        self.position = position;
        self.fraction = if of == 0 {
            1.0
        } else {
            position as f64 / of as f64
        };
        self
    }
}

pub fn create_progress_steps(stage: ProgressStage, labels: &[&str]) -> Vec<ProgressStep> {
    let total = labels.len();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| ProgressStep::new(stage, *label).at(i + 1, total))
        .collect()
}

/// Labels that fit the session's phase: the generation list before the
/// challenge starts, the initialization list after.
pub fn steps_for_phase(challenge: &ChallengeProfile, phase: SessionPhase) -> Vec<ProgressStep> {
    match phase {
        SessionPhase::NotStarted => {
            create_progress_steps(ProgressStage::Generating, &challenge.generation_steps)
        }
        SessionPhase::AwaitingAnswers | SessionPhase::Submitted => {
            create_progress_steps(ProgressStage::Initializing, &challenge.initialization_steps)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::question_banks::{CUSTOMER_CARE, DEVELOPER};

    #[test]
    fn create_progress_steps_numbers_labels_in_order() {
        let steps = create_progress_steps(ProgressStage::Initializing, &["one", "two", "three"]);

        let labels: Vec<&str> = steps.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["one", "two", "three"]);
        assert_eq!(steps[0].position, 1);
        assert_eq!(steps[2].position, 3);
        assert!((steps[0].fraction - 1.0 / 3.0).abs() < f64::EPSILON);
        assert!((steps[2].fraction - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn not_started_sessions_show_generation_steps() {
        let steps = steps_for_phase(&CUSTOMER_CARE, SessionPhase::NotStarted);

        assert_eq!(steps.len(), CUSTOMER_CARE.generation_steps.len());
        assert!(steps.iter().all(|s| s.stage == ProgressStage::Generating));
    }

    #[test]
    fn started_sessions_show_initialization_steps() {
        let steps = steps_for_phase(&DEVELOPER, SessionPhase::AwaitingAnswers);

        assert_eq!(steps.len(), 3);
        assert!(steps.iter().all(|s| s.stage == ProgressStage::Initializing));
        assert_eq!(steps[0].label, DEVELOPER.initialization_steps[0]);
    }

    #[test]
    fn empty_label_list_yields_no_steps() {
        assert!(create_progress_steps(ProgressStage::Generating, &[]).is_empty());
    }
}
