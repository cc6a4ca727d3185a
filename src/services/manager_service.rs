use std::sync::Arc;

use chrono::Local;
use uuid::Uuid;

use crate::{
    constants::prompts,
    errors::{AppError, AppResult},
    models::{
        domain::{
            team::{workload_distribution, TeamMember, WeeklyTrend, WorkloadItem, SKILL_COLUMNS},
            ManagerSection, TeamSnapshot,
        },
        dto::dashboard_dto::{
            ChartSpec, ControlKind, HeatmapRow, InsightView, LabeledValue, LinePoint, LineSeries,
            NoticeLevel, PageLoadView, ScatterPoint, SectionNavView, SectionView, Widget,
        },
    },
    repositories::TeamSnapshotRepository,
    services::insight_service::InsightService,
};

const SIDEBAR_TITLE: &str = "👔 Raj's Manager Panel";
const SIDEBAR_CAPTION: &str = "Keep your team thriving with IBM Granite AI insights.";

/// A widget whose content is either known up front or waits on an insight call.
#[derive(Debug, Clone, PartialEq)]
pub enum PlannedWidget {
    Ready(Widget),
    Insight {
        prompt_prefix: &'static str,
        payload: String,
    },
}

/// Section layout computed from a snapshot, before any insight is fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionPlan {
    pub section: ManagerSection,
    pub widgets: Vec<PlannedWidget>,
}

impl SectionPlan {
    fn new(section: ManagerSection) -> Self {
        Self {
            section,
            widgets: Vec::new(),
        }
    }

    fn push(&mut self, widget: Widget) -> &mut Self {
        self.widgets.push(PlannedWidget::Ready(widget));
        self
    }

    fn insight(&mut self, prompt_prefix: &'static str, payload: String) -> &mut Self {
        self.widgets.push(PlannedWidget::Insight {
            prompt_prefix,
            payload,
        });
        self
    }

    pub fn insight_requests(&self) -> Vec<(&'static str, &str)> {
        self.widgets
            .iter()
            .filter_map(|widget| match widget {
                PlannedWidget::Insight {
                    prompt_prefix,
                    payload,
                } => Some((*prompt_prefix, payload.as_str())),
                PlannedWidget::Ready(_) => None,
            })
            .collect()
    }
}

pub struct ManagerService {
    snapshots: Arc<dyn TeamSnapshotRepository>,
    insights: Arc<InsightService>,
}

impl ManagerService {
    pub fn new(snapshots: Arc<dyn TeamSnapshotRepository>, insights: Arc<InsightService>) -> Self {
        Self {
            snapshots,
            insights,
        }
    }

    pub fn sections(&self) -> Vec<SectionNavView> {
        ManagerSection::ALL
            .into_iter()
            .map(SectionNavView::from)
            .collect()
    }

    /// Draws the team figures shared by every section of this page load.
    pub async fn create_page_load(&self) -> AppResult<PageLoadView> {
        let snapshot = {
            let mut rng = rand::thread_rng();
            TeamSnapshot::generate(&mut rng, Local::now().date_naive())
        };
        let snapshot = self.snapshots.save(snapshot).await?;

        log::info!("Generated team snapshot for manager page {}", snapshot.id);
        Ok(PageLoadView {
            page_id: snapshot.id,
            sidebar_title: SIDEBAR_TITLE.to_string(),
            sidebar_caption: SIDEBAR_CAPTION.to_string(),
            sections: self.sections(),
            members: snapshot.members.iter().map(|m| m.name.clone()).collect(),
            generated_at: snapshot.generated_at,
        })
    }

    pub async fn render_section(
        &self,
        page_id: &Uuid,
        section: ManagerSection,
        member: Option<&str>,
    ) -> AppResult<SectionView> {
        let snapshot = self.snapshots.find_by_id(page_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Manager page with id '{}' not found", page_id))
        })?;

        let workload = (section == ManagerSection::WorkloadDistribution)
            .then(|| workload_distribution(&mut rand::thread_rng()))
            .unwrap_or_default();
        let plan = plan_section(&snapshot, section, member, &workload)?;

        let mut widgets = Vec::with_capacity(plan.widgets.len());
        for planned in plan.widgets {
            let widget = match planned {
                PlannedWidget::Ready(widget) => widget,
                PlannedWidget::Insight {
                    prompt_prefix,
                    payload,
                } => {
                    let outcome = self.insights.fetch_insight(prompt_prefix, &payload).await;
                    Widget::Insight {
                        insight: InsightView::from(outcome),
                    }
                }
            };
            widgets.push(widget);
        }

        Ok(SectionView {
            page_id: snapshot.id,
            section,
            title: section.title().to_string(),
            widgets,
        })
    }
}

/// Lays out one section. `workload` is only read by the workload section.
pub fn plan_section(
    snapshot: &TeamSnapshot,
    section: ManagerSection,
    member: Option<&str>,
    workload: &[WorkloadItem],
) -> AppResult<SectionPlan> {
    let mut plan = SectionPlan::new(section);

    match section {
        ManagerSection::EngagementOverview => {
            let monotony = score_rows(&snapshot.members, |m| m.monotony);
            let productivity = score_rows(&snapshot.members, |m| m.productivity);

            let mut hotspots = monotony.clone();
            hotspots.sort_by(|a, b| b.value.cmp(&a.value));
            let mut performers = productivity.clone();
            performers.sort_by(|a, b| a.value.cmp(&b.value));

            plan.push(subheader("🔥 Monotony Hotspots"))
                .push(bar_chart("Monotony Score (%)", "reds", hotspots))
                .insight(
                    prompts::MONOTONY_HOTSPOTS_PROMPT,
                    labeled_csv("Monotony Score (%)", &monotony)?,
                )
                .push(subheader("⚙️ Productivity Overview"))
                .push(bar_chart("Productivity (%)", "greens", performers))
                .insight(
                    prompts::PRODUCTIVITY_OVERVIEW_PROMPT,
                    labeled_csv("Productivity (%)", &productivity)?,
                );
        }
        ManagerSection::TeamInsights => {
            let selected = match member {
                Some(name) => snapshot.member(name).ok_or_else(|| {
                    AppError::NotFound(format!("Unknown team member '{}'", name))
                })?,
                None => snapshot.members.first().ok_or_else(|| {
                    AppError::InternalError("Team snapshot has no members".to_string())
                })?,
            };

            let mut columns = vec![String::new()];
            columns.extend(SKILL_COLUMNS.iter().map(|c| c.to_string()));
            let mut row = vec![selected.name.clone()];
            row.extend(selected.skills.iter().map(|s| s.to_string()));

            plan.push(Widget::Metric {
                label: "😐 Monotony".to_string(),
                value: format!("{}%", selected.monotony),
            })
            .push(Widget::Metric {
                label: "⚙️ Productivity".to_string(),
                value: format!("{}%", selected.productivity),
            })
            .push(Widget::Table {
                columns,
                rows: vec![row],
            })
            .insight(
                prompts::MEMBER_DEEP_DIVE_PROMPT,
                format!(
                    "Monotony: {}, Productivity: {}, Skills: {}",
                    selected.monotony,
                    selected.productivity,
                    selected.skill_summary()
                ),
            );
        }
        ManagerSection::SkillHeatmap => {
            plan.push(markdown("Visualize micro-challenge growth areas"))
                .push(Widget::Chart {
                    chart: ChartSpec::Heatmap {
                        x_label: "Skill".to_string(),
                        y_label: "Team Member".to_string(),
                        color_label: "Credential Count".to_string(),
                        color_scale: "Blues".to_string(),
                        columns: SKILL_COLUMNS.iter().map(|c| c.to_string()).collect(),
                        rows: snapshot
                            .members
                            .iter()
                            .map(|m| HeatmapRow {
                                label: m.name.clone(),
                                values: m.skills.clone(),
                            })
                            .collect(),
                    },
                })
                .insight(prompts::SKILL_MATRIX_PROMPT, skill_matrix_csv(&snapshot.members)?);
        }
        ManagerSection::WorkloadDistribution => {
            let payload = workload
                .iter()
                .map(|item| format!("{}: {}", item.task, item.hours))
                .collect::<Vec<_>>()
                .join(", ");

            plan.push(Widget::Chart {
                chart: ChartSpec::Pie {
                    title: "Workload Distribution (This Week)".to_string(),
                    hole: 0.3,
                    slices: workload
                        .iter()
                        .map(|item| LabeledValue::new(item.task.clone(), item.hours))
                        .collect(),
                },
            })
            .insight(prompts::WORKLOAD_PROMPT, payload);
        }
        ManagerSection::EngagementTrends => {
            let series = |name: &str, pick: fn(&WeeklyTrend) -> i32| {
                LineSeries {
                    name: name.to_string(),
                    points: snapshot
                        .weekly_trends
                        .iter()
                        .map(|t| LinePoint {
                            x: t.week,
                            y: pick(t),
                        })
                        .collect(),
                }
            };

            plan.push(Widget::Chart {
                chart: ChartSpec::Line {
                    x_label: "Week".to_string(),
                    markers: true,
                    series: vec![
                        series("Avg Monotony", |t| t.avg_monotony),
                        series("Avg Productivity", |t| t.avg_productivity),
                    ],
                },
            })
            .push(subheader("📉 Correlation: Monotony vs Productivity"))
            .push(Widget::Chart {
                chart: ChartSpec::Scatter {
                    x_label: "Monotony".to_string(),
                    y_label: "Productivity".to_string(),
                    trendline: Some("ols".to_string()),
                    points: snapshot
                        .members
                        .iter()
                        .map(|m| ScatterPoint {
                            label: m.name.clone(),
                            x: m.monotony,
                            y: m.productivity,
                        })
                        .collect(),
                },
            })
            .insight(prompts::WEEKLY_TRENDS_PROMPT, weekly_trends_csv(snapshot)?);
        }
        ManagerSection::Suggestions => {
            plan.push(notice(
                NoticeLevel::Warning,
                "🔄 4 members may benefit from creative project swaps:",
            ))
            .push(markdown(
                "- Team Member 3 🔁 Team Member 8\n- Team Member 6 🔁 Team Member 11\n- Team Member 2 🔁 Team Member 9",
            ))
            .push(notice(
                NoticeLevel::Info,
                "✨ Creative switches can reduce burnout and spark innovation.",
            ))
            .insight(
                prompts::SWAP_SUGGESTIONS_PROMPT,
                prompts::SWAP_SUGGESTIONS_PAYLOAD.to_string(),
            )
            .push(control(ControlKind::Button, "📤 Notify Team"));
        }
        ManagerSection::HrReport => {
            plan.push(notice(
                NoticeLevel::Success,
                "🎉 0% team turnover vs 24% department average",
            ))
            .push(markdown(
                "- 🎓 42 upskilling events\n- ✅ 3 promotions\n- 💬 98% peer feedback participation",
            ))
            .insight(prompts::HR_REPORT_PROMPT, prompts::HR_REPORT_PAYLOAD.to_string())
            .push(Widget::Download {
                label: "📄 Download HR Summary".to_string(),
                file_name: "hr_summary.pdf".to_string(),
                data: "HR Report Summary".to_string(),
            });
        }
        ManagerSection::PinnedTasks => {
            plan.push(markdown(
                "- ✅ Review monotony scores >70%\n- 🔄 Send swap suggestions to HR\n- 🎯 Create 1 new creative challenge\n- 📅 Set 1:1s with Team Member 6 and 11",
            ))
            .push(control(ControlKind::Checkbox, "Mark as done"))
            .push(control(ControlKind::TextArea, "📝 Add New Task"))
            .insight(
                prompts::PINNED_TASKS_PROMPT,
                prompts::PINNED_TASKS_PAYLOAD.to_string(),
            );
        }
    }

    Ok(plan)
}

fn subheader(text: &str) -> Widget {
    Widget::Subheader {
        text: text.to_string(),
    }
}

fn markdown(text: &str) -> Widget {
    Widget::Markdown {
        text: text.to_string(),
    }
}

fn notice(level: NoticeLevel, text: &str) -> Widget {
    Widget::Notice {
        level,
        text: text.to_string(),
    }
}

fn control(control: ControlKind, label: &str) -> Widget {
    Widget::Control {
        control,
        label: label.to_string(),
    }
}

fn bar_chart(value_label: &str, color_scale: &str, bars: Vec<LabeledValue>) -> Widget {
    Widget::Chart {
        chart: ChartSpec::Bar {
            value_label: value_label.to_string(),
            category_label: "Team Member".to_string(),
            color_scale: color_scale.to_string(),
            bars,
        },
    }
}

fn score_rows(members: &[TeamMember], pick: fn(&TeamMember) -> i32) -> Vec<LabeledValue> {
    members
        .iter()
        .map(|m| LabeledValue::new(m.name.clone(), pick(m)))
        .collect()
}

fn csv_writer() -> csv::Writer<Vec<u8>> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> AppResult<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to flush CSV payload: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| AppError::InternalError(format!("CSV payload is not UTF-8: {}", e)))
}

/// Two-column `Team Member,<value_label>` table in roster order.
fn labeled_csv(value_label: &str, rows: &[LabeledValue]) -> AppResult<String> {
    let mut writer = csv_writer();
    writer.write_record(["Team Member", value_label])?;
    for row in rows {
        writer.write_record([row.label.clone(), row.value.to_string()])?;
    }
    finish_csv(writer)
}

/// Skill matrix with the member name as an unnamed index column.
fn skill_matrix_csv(members: &[TeamMember]) -> AppResult<String> {
    let mut writer = csv_writer();
    let mut header = vec![""];
    header.extend(SKILL_COLUMNS);
    writer.write_record(&header)?;
    for member in members {
        let mut record = vec![member.name.clone()];
        record.extend(member.skills.iter().map(|s| s.to_string()));
        writer.write_record(&record)?;
    }
    finish_csv(writer)
}

fn weekly_trends_csv(snapshot: &TeamSnapshot) -> AppResult<String> {
    let mut writer = csv_writer();
    writer.write_record(["Week", "Avg Monotony", "Avg Productivity"])?;
    for trend in &snapshot.weekly_trends {
        writer.write_record([
            trend.week.to_string(),
            trend.avg_monotony.to_string(),
            trend.avg_productivity.to_string(),
        ])?;
    }
    finish_csv(writer)
}
