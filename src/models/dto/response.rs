use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    models::domain::{
        metrics::{format_metrics, CategoryValue, MetricGauge, MetricKind},
        persona::{ChallengeProfile, MetricLabels},
        ChallengeSession, MetricsPanel, Persona, ScoreResult, SessionPhase,
    },
    services::challenge_steps::{steps_for_phase, ProgressStage, ProgressStep},
};

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct PersonaSummary {
    pub persona: Persona,
    pub slug: String,
    pub display_name: String,
    pub has_challenge: bool,
}

impl From<Persona> for PersonaSummary {
    fn from(persona: Persona) -> Self {
        PersonaSummary {
            persona,
            slug: persona.slug().to_string(),
            display_name: persona.display_name().to_string(),
            has_challenge: persona.challenge().is_some(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct HistoryView {
    pub date: String,
    pub task: String,
}

/// Landing content of a quiz persona, before any session exists.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct PersonaOverview {
    pub persona: Persona,
    pub title: String,
    pub learner_name: String,
    pub intro: String,
    pub video_url: String,
    pub video_prompt: String,
    pub start_label: String,
    pub badge_name: String,
    pub question_count: u32,
    pub pass_threshold: u32,
    pub history: Vec<HistoryView>,
    pub metrics: MetricsPanelView,
}

impl From<&ChallengeProfile> for PersonaOverview {
    fn from(challenge: &ChallengeProfile) -> Self {
        PersonaOverview {
            persona: challenge.persona,
            title: challenge.title.to_string(),
            learner_name: challenge.learner_name.to_string(),
            intro: challenge.intro.to_string(),
            video_url: challenge.video_url.to_string(),
            video_prompt: challenge.video_prompt.to_string(),
            start_label: challenge.start_label.to_string(),
            badge_name: challenge.badge_name.to_string(),
            question_count: count(challenge.questions.len()),
            pass_threshold: count(challenge.pass_threshold),
            history: challenge
                .history
                .iter()
                .map(|entry| HistoryView {
                    date: entry.date.to_string(),
                    task: entry.task.to_string(),
                })
                .collect(),
            metrics: MetricsPanelView::render(
                &format_metrics(&challenge.metrics_before, None),
                &challenge.metric_labels,
                "Before Test",
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct MetricGaugeView {
    pub kind: MetricKind,
    pub label: String,
    pub value: i32,
    pub value_display: String,
    pub delta: Option<i32>,
    pub delta_display: Option<String>,
}

impl MetricGaugeView {
    fn render(gauge: &MetricGauge, labels: &MetricLabels) -> Self {
        let label = match gauge.kind {
            MetricKind::Monotony => labels.monotony,
            MetricKind::Productivity => labels.productivity,
            MetricKind::SkillEngagement => labels.skill,
        };
        MetricGaugeView {
            kind: gauge.kind,
            label: label.to_string(),
            value: gauge.value,
            value_display: gauge.value_display(),
            delta: gauge.delta,
            delta_display: gauge.delta_display(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct CategoryView {
    pub label: String,
    pub value: i32,
}

impl From<&CategoryValue> for CategoryView {
    fn from(category: &CategoryValue) -> Self {
        CategoryView {
            label: category.label.clone(),
            value: category.value,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct MetricsPanelView {
    pub heading: String,
    pub title: String,
    pub breakdown_title: String,
    pub gauges: Vec<MetricGaugeView>,
    pub breakdown: Vec<CategoryView>,
}

impl MetricsPanelView {
    pub fn render(panel: &MetricsPanel, labels: &MetricLabels, heading: &str) -> Self {
        MetricsPanelView {
            heading: heading.to_string(),
            title: labels.dashboard_title.to_string(),
            breakdown_title: labels.breakdown_title.to_string(),
            gauges: panel
                .gauges
                .iter()
                .map(|gauge| MetricGaugeView::render(gauge, labels))
                .collect(),
            breakdown: panel.breakdown.iter().map(CategoryView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuestionView {
    pub index: u32,
    pub number: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Option<String>,
    /// Revealed once the session is submitted.
    pub correct_answer: Option<String>,
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ScoreView {
    pub correct_count: u32,
    pub total: u32,
    pub passed: bool,
    pub message: String,
}

impl From<ScoreResult> for ScoreView {
    fn from(result: ScoreResult) -> Self {
        ScoreView {
            correct_count: count(result.correct_count),
            total: count(result.total),
            passed: result.passed,
            message: format!(
                "🎉 You scored {} out of {}",
                result.correct_count, result.total
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct BadgeView {
    pub name: String,
    pub message: String,
}

impl BadgeView {
    fn unlocked(name: &str) -> Self {
        BadgeView {
            name: name.to_string(),
            message: format!(
                "🏅 Congratulations! You've unlocked the **{}** badge.",
                name
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct SkillApplicationView {
    pub question: String,
    pub choices: Vec<String>,
    pub selected: Option<String>,
    pub response: Option<String>,
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct ProgressStepView {
    pub stage: ProgressStage,
    pub position: u32,
    pub label: String,
    pub fraction: f64,
}

impl From<ProgressStep> for ProgressStepView {
    fn from(step: ProgressStep) -> Self {
        ProgressStepView {
            stage: step.stage,
            position: count(step.position),
            label: step.label,
            fraction: step.fraction,
        }
    }
}

/// Everything a client needs to draw one quiz dashboard.
#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct SessionView {
    pub id: Uuid,
    pub persona: Persona,
    pub phase: SessionPhase,
    pub video_url: String,
    pub video_confirmed: bool,
    pub can_start: bool,
    pub gate_notice: Option<String>,
    pub questions: Vec<QuestionView>,
    pub answered_count: u32,
    pub score: Option<ScoreView>,
    pub badge: Option<BadgeView>,
    pub metrics: MetricsPanelView,
    pub skill_application: Option<SkillApplicationView>,
    pub progress_steps: Vec<ProgressStepView>,
    pub progress_step_millis: u32,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl SessionView {
    pub fn render(
        session: &ChallengeSession,
        challenge: &ChallengeProfile,
        progress_step_millis: u64,
    ) -> Self {
        let state = &session.state;
        let submitted = state.is_submitted();

        let questions = if state.is_started() {
            challenge
                .questions
                .iter()
                .enumerate()
                .map(|(i, question)| {
                    let selected = state.answers.get(&i).cloned();
                    QuestionView {
                        index: count(i),
                        number: count(i + 1),
                        prompt: question.prompt.clone(),
                        options: question.options.clone(),
                        correct_answer: submitted.then(|| question.correct_answer.clone()),
                        is_correct: submitted
                            .then(|| question.is_correct(selected.as_deref())),
                        selected,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let result = state.score(challenge);
        let badge = result
            .filter(|r| r.passed)
            .map(|_| BadgeView::unlocked(challenge.badge_name));

        let metrics = if submitted {
            MetricsPanelView::render(
                &format_metrics(&challenge.metrics_before, Some(&challenge.metrics_after)),
                &challenge.metric_labels,
                "After Test",
            )
        } else {
            MetricsPanelView::render(
                &format_metrics(&challenge.metrics_before, None),
                &challenge.metric_labels,
                "Before Test",
            )
        };

        let skill_application = submitted.then(|| SkillApplicationView {
            question: challenge.skill_application_question.to_string(),
            choices: challenge
                .skill_application_choices
                .iter()
                .map(|c| c.choice.to_string())
                .collect(),
            selected: state.skill_application.clone(),
            response: state
                .skill_application
                .as_deref()
                .and_then(|choice| challenge.skill_application_response(choice))
                .map(str::to_string),
        });

        let gate_notice = (state.phase == SessionPhase::NotStarted && !state.video_confirmed)
            .then(|| "👀 Please watch the full video and check the box to continue.".to_string());

        SessionView {
            id: session.id,
            persona: session.persona,
            phase: state.phase,
            video_url: challenge.video_url.to_string(),
            video_confirmed: state.video_confirmed,
            can_start: state.phase == SessionPhase::NotStarted && state.video_confirmed,
            gate_notice,
            questions,
            answered_count: count(state.answers.len()),
            score: result.map(ScoreView::from),
            badge,
            metrics,
            skill_application,
            progress_steps: steps_for_phase(challenge, state.phase)
                .into_iter()
                .map(ProgressStepView::from)
                .collect(),
            progress_step_millis: u32::try_from(progress_step_millis).unwrap_or(u32::MAX),
            created_at: session.created_at,
            modified_at: session.modified_at,
        }
    }
}
