//! Prompt prefixes for the manager dashboard insight calls. Each prefix is
//! concatenated directly with the section's payload.

pub const MONOTONY_HOTSPOTS_PROMPT: &str = "From these monotony scores, identify the highest, lowest, and average values. Mention any outliers or potential burnout risks using IBM Granite insights.:\n";

pub const PRODUCTIVITY_OVERVIEW_PROMPT: &str = "Review these productivity scores. Highlight the highest and lowest performers, calculate the average, and offer a quick insight into team efficiency using IBM Granite.:\n";

pub const MEMBER_DEEP_DIVE_PROMPT: &str = "Given this team member’s monotony, productivity, and skill data, summarize engagement status and suggest a short development path using IBM Granite AI.:\n";

pub const SKILL_MATRIX_PROMPT: &str = "Analyze this skill matrix. Identify top-skilled areas and least-developed skills across the team. Suggest training focus based on IBM Granite insights.:\n";

pub const WORKLOAD_PROMPT: &str = "From this workload breakdown, list the most and least time-consuming tasks. Evaluate if the load is balanced and provide a short IBM Granite suggestion.:\n";

pub const WEEKLY_TRENDS_PROMPT: &str = "Analyze these weekly trends for average monotony and productivity. Point out peak and dip weeks. Provide insights into how engagement changed using IBM Granite.:\n";

pub const SWAP_SUGGESTIONS_PROMPT: &str = "Based on engagement and skill data, explain why the proposed team swaps are beneficial. Keep it factual and supported by IBM Granite AI logic.:\n";

pub const HR_REPORT_PROMPT: &str = "Summarize key HR metrics: highlight achievements and average participation rates. Mention any exceptional performance using IBM Granite insights.:\n";

pub const PINNED_TASKS_PROMPT: &str = "From these tasks, identify priority based on impact and urgency. Suggest which should be done first, and why, using IBM Granite analysis.:\n";

pub const SWAP_SUGGESTIONS_PAYLOAD: &str =
    "Suggest reasons these swaps might work based on engagement and skill diversity.";

pub const HR_REPORT_PAYLOAD: &str =
    "HR Report: 42 upskilling, 3 promotions, 98% feedback, 0% attrition.";

pub const PINNED_TASKS_PAYLOAD: &str = "Review monotony, swaps, challenges, 1:1s";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_prefixes_end_with_payload_separator() {
        for prompt in [
            MONOTONY_HOTSPOTS_PROMPT,
            PRODUCTIVITY_OVERVIEW_PROMPT,
            MEMBER_DEEP_DIVE_PROMPT,
            SKILL_MATRIX_PROMPT,
            WORKLOAD_PROMPT,
            WEEKLY_TRENDS_PROMPT,
            SWAP_SUGGESTIONS_PROMPT,
            HR_REPORT_PROMPT,
            PINNED_TASKS_PROMPT,
        ] {
            assert!(prompt.ends_with(".:\n"));
        }
    }
}
