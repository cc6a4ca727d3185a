use async_graphql::SimpleObject;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{models::domain::ManagerSection, services::insight_service::InsightOutcome};

pub const INSIGHT_LABEL: &str = "🧠 IBM Granite Insight";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: i32,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: i32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapRow {
    pub label: String,
    pub values: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub x: NaiveDate,
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: String,
    pub points: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub x: i32,
    pub y: i32,
}

/// Chart description the front end hands to its plotting library.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    /// Horizontal bars: value on x, label on y.
    Bar {
        value_label: String,
        category_label: String,
        color_scale: String,
        bars: Vec<LabeledValue>,
    },
    Pie {
        title: String,
        hole: f64,
        slices: Vec<LabeledValue>,
    },
    Heatmap {
        x_label: String,
        y_label: String,
        color_label: String,
        color_scale: String,
        columns: Vec<String>,
        rows: Vec<HeatmapRow>,
    },
    Line {
        x_label: String,
        markers: bool,
        series: Vec<LineSeries>,
    },
    Scatter {
        x_label: String,
        y_label: String,
        trendline: Option<String>,
        points: Vec<ScatterPoint>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Button,
    Checkbox,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightView {
    pub label: String,
    pub text: String,
    pub outcome: InsightOutcome,
}

impl From<InsightOutcome> for InsightView {
    fn from(outcome: InsightOutcome) -> Self {
        InsightView {
            label: INSIGHT_LABEL.to_string(),
            text: outcome.display_text(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum Widget {
    Subheader { text: String },
    Markdown { text: String },
    Notice { level: NoticeLevel, text: String },
    Chart { chart: ChartSpec },
    Metric { label: String, value: String },
    Table { columns: Vec<String>, rows: Vec<Vec<String>> },
    Control { control: ControlKind, label: String },
    Download { label: String, file_name: String, data: String },
    Insight { insight: InsightView },
}

#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
pub struct SectionNavView {
    pub section: ManagerSection,
    pub label: String,
}

impl From<ManagerSection> for SectionNavView {
    fn from(section: ManagerSection) -> Self {
        SectionNavView {
            section,
            label: section.nav_label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageLoadView {
    pub page_id: Uuid,
    pub sidebar_title: String,
    pub sidebar_caption: String,
    pub sections: Vec<SectionNavView>,
    pub members: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub page_id: Uuid,
    pub section: ManagerSection,
    pub title: String,
    pub widgets: Vec<Widget>,
}

impl SectionView {
    pub fn insights(&self) -> impl Iterator<Item = &InsightView> {
        self.widgets.iter().filter_map(|widget| match widget {
            Widget::Insight { insight } => Some(insight),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widgets_serialize_with_tags() {
        let widget = Widget::Chart {
            chart: ChartSpec::Pie {
                title: "Workload".to_string(),
                hole: 0.3,
                slices: vec![LabeledValue::new("Reporting", 12)],
            },
        };

        let json = serde_json::to_value(&widget).expect("widget should serialize");
        assert_eq!(json["widget"], "chart");
        assert_eq!(json["chart"]["kind"], "pie");
        assert_eq!(json["chart"]["slices"][0]["label"], "Reporting");
    }

    #[test]
    fn failed_insight_view_carries_inline_text() {
        let view = InsightView::from(InsightOutcome::Failed {
            message: "boom".to_string(),
            raw_response: "{}".to_string(),
        });

        assert_eq!(view.label, INSIGHT_LABEL);
        assert_eq!(view.text, "⚠️ Watsonx error: boom\n\nResponse: {}");
    }

    #[test]
    fn nav_view_uses_sidebar_label() {
        let nav = SectionNavView::from(ManagerSection::HrReport);
        assert_eq!(nav.label, "HR Report");
    }
}
