use std::{fmt, str::FromStr};

use async_graphql::Enum;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Pages of the manager dashboard sidebar. One renders at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Enum)]
#[serde(rename_all = "kebab-case")]
pub enum ManagerSection {
    EngagementOverview,
    TeamInsights,
    SkillHeatmap,
    WorkloadDistribution,
    EngagementTrends,
    Suggestions,
    HrReport,
    PinnedTasks,
}

impl ManagerSection {
    pub const ALL: [ManagerSection; 8] = [
        ManagerSection::EngagementOverview,
        ManagerSection::TeamInsights,
        ManagerSection::SkillHeatmap,
        ManagerSection::WorkloadDistribution,
        ManagerSection::EngagementTrends,
        ManagerSection::Suggestions,
        ManagerSection::HrReport,
        ManagerSection::PinnedTasks,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ManagerSection::EngagementOverview => "engagement-overview",
            ManagerSection::TeamInsights => "team-insights",
            ManagerSection::SkillHeatmap => "skill-heatmap",
            ManagerSection::WorkloadDistribution => "workload-distribution",
            ManagerSection::EngagementTrends => "engagement-trends",
            ManagerSection::Suggestions => "suggestions",
            ManagerSection::HrReport => "hr-report",
            ManagerSection::PinnedTasks => "pinned-tasks",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            ManagerSection::EngagementOverview => "Engagement Overview",
            ManagerSection::TeamInsights => "Team Insights",
            ManagerSection::SkillHeatmap => "Skill Heatmap",
            ManagerSection::WorkloadDistribution => "Workload Distribution",
            ManagerSection::EngagementTrends => "Engagement Trends",
            ManagerSection::Suggestions => "Suggestions",
            ManagerSection::HrReport => "HR Report",
            ManagerSection::PinnedTasks => "Pinned Tasks",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ManagerSection::EngagementOverview => {
                "📊 Team Engagement Overview (Powered by IBM Granite)"
            }
            ManagerSection::TeamInsights => "🧑‍💼 Team Member Deep Dive (IBM Granite)",
            ManagerSection::SkillHeatmap => "🌐 Skill Heatmap Across Team (IBM Granite)",
            ManagerSection::WorkloadDistribution => "📊 Team Workload Overview (IBM Granite)",
            ManagerSection::EngagementTrends => "📈 Engagement Trends Over Time (IBM Granite)",
            ManagerSection::Suggestions => "💡 AI-Powered Suggestions (IBM Granite)",
            ManagerSection::HrReport => "🏆 Quarterly HR Highlights (Powered by IBM Granite)",
            ManagerSection::PinnedTasks => "📌 Manager's Action Board (IBM Granite)",
        }
    }
}

impl fmt::Display for ManagerSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ManagerSection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ManagerSection::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| AppError::NotFound(format!("Unknown manager section '{}'", s)))
    }
}
