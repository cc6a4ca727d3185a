use async_graphql::Enum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryValue {
    pub label: String,
    pub value: i32,
}

impl CategoryValue {
    pub fn new(label: &str, value: i32) -> Self {
        CategoryValue {
            label: label.to_string(),
            value,
        }
    }
}

/// Fixed before/after figures shown around a challenge. Not measured.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetricsSnapshot {
    pub monotony: i32,
    pub productivity: i32,
    pub skill_engagement: i32,
    pub categories: Vec<CategoryValue>,
}

impl MetricsSnapshot {
    pub fn new(monotony: i32, productivity: i32, skill_engagement: i32) -> Self {
        MetricsSnapshot {
            monotony,
            productivity,
            skill_engagement,
            categories: Vec::new(),
        }
    }

    pub fn with_category(mut self, label: &str, value: i32) -> Self {
        self.categories.push(CategoryValue::new(label, value));
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Monotony,
    Productivity,
    SkillEngagement,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetricGauge {
    pub kind: MetricKind,
    pub value: i32,
    pub delta: Option<i32>,
}

impl MetricGauge {
    pub fn value_display(&self) -> String {
        format!("{}%", self.value)
    }

    pub fn delta_display(&self) -> Option<String> {
        self.delta.map(|d| format!("{:+}%", d))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetricsPanel {
    pub gauges: Vec<MetricGauge>,
    pub breakdown: Vec<CategoryValue>,
}

impl MetricsPanel {
    pub fn gauge(&self, kind: MetricKind) -> Option<&MetricGauge> {
        self.gauges.iter().find(|g| g.kind == kind)
    }
}

/// Builds the gauge set for a dashboard. With an `after` snapshot every
/// category of `before` is shifted by the skill delta; `after.categories` is
/// not consulted. Shifted values are not clamped at zero.
pub fn format_metrics(before: &MetricsSnapshot, after: Option<&MetricsSnapshot>) -> MetricsPanel {
    let Some(after) = after else {
        return MetricsPanel {
            gauges: vec![
                MetricGauge {
                    kind: MetricKind::Monotony,
                    value: before.monotony,
                    delta: None,
                },
                MetricGauge {
                    kind: MetricKind::Productivity,
                    value: before.productivity,
                    delta: None,
                },
                MetricGauge {
                    kind: MetricKind::SkillEngagement,
                    value: before.skill_engagement,
                    delta: None,
                },
            ],
            breakdown: before.categories.clone(),
        };
    };

    let skill_delta = after.skill_engagement - before.skill_engagement;

    MetricsPanel {
        gauges: vec![
            MetricGauge {
                kind: MetricKind::Monotony,
                value: after.monotony,
                delta: Some(after.monotony - before.monotony),
            },
            MetricGauge {
                kind: MetricKind::Productivity,
                value: after.productivity,
                delta: Some(after.productivity - before.productivity),
            },
            MetricGauge {
                kind: MetricKind::SkillEngagement,
                value: after.skill_engagement,
                delta: Some(skill_delta),
            },
        ],
        breakdown: before
            .categories
            .iter()
            .map(|c| CategoryValue {
                label: c.label.clone(),
                value: c.value + skill_delta,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer_care_before() -> MetricsSnapshot {
        MetricsSnapshot::new(70, 75, 65)
            .with_category("Empathy", 65)
            .with_category("Communication", 70)
            .with_category("Product Knowledge", 60)
            .with_category("Problem Solving", 55)
    }

    fn values(panel: &MetricsPanel) -> Vec<i32> {
        panel.breakdown.iter().map(|c| c.value).collect()
    }

    #[test]
    fn before_only_shows_before_values_without_deltas() {
        let before = customer_care_before();
        let panel = format_metrics(&before, None);

        assert!(panel.gauges.iter().all(|g| g.delta.is_none()));
        assert_eq!(panel.gauge(MetricKind::Productivity).map(|g| g.value), Some(75));
        assert_eq!(values(&panel), vec![65, 70, 60, 55]);
    }

    #[test]
    fn after_shifts_every_category_by_skill_delta() {
        let before = customer_care_before();
        let after = MetricsSnapshot::new(70, 85, 78);

        let panel = format_metrics(&before, Some(&after));

        assert_eq!(values(&panel), vec![78, 83, 73, 68]);
        let skill = panel.gauge(MetricKind::SkillEngagement).expect("skill gauge");
        assert_eq!(skill.value, 78);
        assert_eq!(skill.delta, Some(13));
        assert_eq!(skill.delta_display().as_deref(), Some("+13%"));
    }

    #[test]
    fn negative_deltas_are_signed_and_categories_unclamped() {
        let before = MetricsSnapshot::new(78, 70, 60)
            .with_category("Prompting", 5)
            .with_category("Debugging", 60);
        let after = MetricsSnapshot::new(65, 85, 50);

        let panel = format_metrics(&before, Some(&after));

        let monotony = panel.gauge(MetricKind::Monotony).expect("monotony gauge");
        assert_eq!(monotony.delta, Some(-13));
        assert_eq!(monotony.delta_display().as_deref(), Some("-13%"));
        assert_eq!(values(&panel), vec![-5, 50]);
    }

    #[test]
    fn gauge_values_render_as_percentages() {
        let gauge = MetricGauge {
            kind: MetricKind::Monotony,
            value: 70,
            delta: Some(0),
        };

        assert_eq!(gauge.value_display(), "70%");
        assert_eq!(gauge.delta_display().as_deref(), Some("+0%"));
    }
}
