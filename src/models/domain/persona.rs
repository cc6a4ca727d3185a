use std::{fmt, str::FromStr};

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::{
    constants::question_banks,
    errors::AppError,
    models::domain::{metrics::MetricsSnapshot, question::QuestionRecord},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    CustomerCare,
    Developer,
    SpreadsheetUser,
    Manager,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::CustomerCare,
        Persona::Developer,
        Persona::SpreadsheetUser,
        Persona::Manager,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Persona::CustomerCare => "customer-care",
            Persona::Developer => "developer",
            Persona::SpreadsheetUser => "spreadsheet-user",
            Persona::Manager => "manager",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::CustomerCare => "Customer Care",
            Persona::Developer => "Developer",
            Persona::SpreadsheetUser => "Spreadsheet User",
            Persona::Manager => "Manager",
        }
    }

    /// Quiz definition for the persona. The manager dashboard has none.
    pub fn challenge(&self) -> Option<&'static ChallengeProfile> {
        match self {
            Persona::CustomerCare => Some(&*question_banks::CUSTOMER_CARE),
            Persona::Developer => Some(&*question_banks::DEVELOPER),
            Persona::SpreadsheetUser => Some(&*question_banks::SPREADSHEET_USER),
            Persona::Manager => None,
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Persona {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.slug() == s)
            .ok_or_else(|| AppError::NotFound(format!("Unknown persona '{}'", s)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum RetakePolicy {
    /// The watched-video confirmation survives a retake.
    KeepVideoConfirmation,
    /// A retake sends the learner back through the video gate.
    RequireVideoAgain,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: &'static str,
    pub task: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillApplicationChoice {
    pub choice: &'static str,
    pub response: &'static str,
}

/// Labels the dashboard uses for the metric widgets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricLabels {
    pub dashboard_title: &'static str,
    pub monotony: &'static str,
    pub productivity: &'static str,
    pub skill: &'static str,
    pub breakdown_title: &'static str,
}

#[derive(Clone, Debug)]
pub struct ChallengeProfile {
    pub persona: Persona,
    pub title: &'static str,
    pub learner_name: &'static str,
    pub intro: &'static str,
    pub video_url: &'static str,
    pub video_prompt: &'static str,
    pub start_label: &'static str,
    pub badge_name: &'static str,
    pub pass_threshold: usize,
    pub retake_policy: RetakePolicy,
    pub history: Vec<HistoryEntry>,
    pub questions: Vec<QuestionRecord>,
    pub metric_labels: MetricLabels,
    pub metrics_before: MetricsSnapshot,
    pub metrics_after: MetricsSnapshot,
    pub generation_steps: Vec<&'static str>,
    pub initialization_steps: Vec<&'static str>,
    pub skill_application_question: &'static str,
    pub skill_application_choices: Vec<SkillApplicationChoice>,
}

impl ChallengeProfile {
    pub fn question(&self, index: usize) -> Option<&QuestionRecord> {
        self.questions.get(index)
    }

    pub fn skill_application_response(&self, choice: &str) -> Option<&'static str> {
        self.skill_application_choices
            .iter()
            .find(|c| c.choice == choice)
            .map(|c| c.response)
    }
}
