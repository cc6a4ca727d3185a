//! Static challenge definitions, one per quiz persona.

use once_cell::sync::Lazy;

use crate::models::domain::{
    metrics::MetricsSnapshot,
    persona::{
        ChallengeProfile, HistoryEntry, MetricLabels, Persona, RetakePolicy,
        SkillApplicationChoice,
    },
    question::QuestionRecord,
    score::DEFAULT_PASS_THRESHOLD,
};

const INITIALIZATION_STEPS: [&str; 3] = [
    "📂 Reviewing your recent tasks...",
    "🧠 Spinning up the challenge engine...",
    "📦 Packaging your personalized quiz...",
];

const GENERATION_STEPS: [&str; 3] = [
    "🔍 Fetching task history from Watsonx.data...",
    "🧠 Generating questions using IBM Granite AI model...",
    "📦 Converting output into MCQ format (JSON → Quiz)...",
];

fn workflow_choices() -> Vec<SkillApplicationChoice> {
    vec![
        SkillApplicationChoice {
            choice: "Need to Think",
            response: "⏳ No worries. You can revisit skills anytime.",
        },
        SkillApplicationChoice {
            choice: "Yes",
            response: "🎯 Awesome! TaskGene will prioritize challenges that align with your current workflow.",
        },
        SkillApplicationChoice {
            choice: "No",
            response: "📌 Got it. We’ll focus on more relevant skills in future challenges.",
        },
    ]
}

pub static CUSTOMER_CARE: Lazy<ChallengeProfile> = Lazy::new(|| ChallengeProfile {
    persona: Persona::CustomerCare,
    title: "TaskGene Challenge Arena",
    learner_name: "Rahul",
    intro: "Time to test and refresh your customer service skills. Powered by IBM Granite.",
    video_url: "https://youtu.be/YH1EJlHh7DU?si=VKtuhPy6_4GP9D5W",
    video_prompt: "✅ I have watched the course video and I'm ready for the aptitude challenge",
    start_label: "🚀 Generate Challenge Questions (IBM Granite)",
    badge_name: "Customer care Intermediate",
    pass_threshold: DEFAULT_PASS_THRESHOLD,
    retake_policy: RetakePolicy::KeepVideoConfirmation,
    history: vec![
        HistoryEntry {
            date: "2025-04-18",
            task: "Handled 20+ customer queries via chat",
        },
        HistoryEntry {
            date: "2025-04-19",
            task: "Resolved billing dispute for VIP customer",
        },
        HistoryEntry {
            date: "2025-04-20",
            task: "Created FAQ guide for tier-1 support",
        },
    ],
    questions: vec![
        QuestionRecord::new(
            "What is the first step in handling an angry customer?",
            [
                "A. Interrupt them",
                "B. Listen actively",
                "C. Offer a discount",
                "D. Escalate to supervisor",
            ],
            "B. Listen actively",
        ),
        QuestionRecord::new(
            "Which phrase best shows empathy?",
            [
                "A. That's our policy",
                "B. I understand how frustrating that must be",
                "C. You'll have to wait",
                "D. It's not my department",
            ],
            "B. I understand how frustrating that must be",
        ),
        QuestionRecord::new(
            "When is it best to escalate a call?",
            [
                "A. After saying no",
                "B. If the issue is beyond your scope",
                "C. Right away",
                "D. Never escalate",
            ],
            "B. If the issue is beyond your scope",
        ),
        QuestionRecord::new(
            "What is a good way to end a customer service interaction?",
            [
                "A. Say goodbye",
                "B. Hang up",
                "C. Confirm issue resolution and thank the customer",
                "D. Transfer them",
            ],
            "C. Confirm issue resolution and thank the customer",
        ),
        QuestionRecord::new(
            "Which of the following helps build trust with customers?",
            [
                "A. Over-promising",
                "B. Being vague",
                "C. Providing accurate information",
                "D. Avoiding questions",
            ],
            "C. Providing accurate information",
        ),
    ],
    metric_labels: MetricLabels {
        dashboard_title: "📈 Skill & Productivity Dashboard",
        monotony: "🧠 Monotony Score",
        productivity: "⚙️ Productivity",
        skill: "📚 Skill Engagement",
        breakdown_title: "📊 Visual Skill Tracker",
    },
    metrics_before: MetricsSnapshot::new(70, 75, 65)
        .with_category("Empathy", 65)
        .with_category("Communication", 70)
        .with_category("Product Knowledge", 60)
        .with_category("Problem Solving", 55),
    metrics_after: MetricsSnapshot::new(70, 85, 78),
    generation_steps: GENERATION_STEPS.to_vec(),
    initialization_steps: INITIALIZATION_STEPS.to_vec(),
    skill_application_question:
        "Would you like to use this customer care skill in your current or upcoming tasks?",
    skill_application_choices: workflow_choices(),
});

pub static DEVELOPER: Lazy<ChallengeProfile> = Lazy::new(|| ChallengeProfile {
    persona: Persona::Developer,
    title: "👨‍💻 DevSprint Challenge Arena",
    learner_name: "Developer",
    intro: "You're halfway through debugging legacy Python scripts. This arena introduces \
            Prompt Engineering and how much manual effort it can save with IBM Granite AI.",
    video_url: "https://youtu.be/IbVjxg9bHAw?si=rTi5O2OB5tDI8ecf",
    video_prompt: "✅ I've watched the video and I'm ready for the quiz",
    start_label: "🚀 Generate My AI Developer Quiz",
    badge_name: "Prompt Engineering Beginner",
    pass_threshold: DEFAULT_PASS_THRESHOLD,
    retake_policy: RetakePolicy::RequireVideoAgain,
    history: vec![
        HistoryEntry {
            date: "2025-04-18",
            task: "Wrote custom parsing logic for logs manually",
        },
        HistoryEntry {
            date: "2025-04-19",
            task: "Manually tested edge cases for REST API",
        },
        HistoryEntry {
            date: "2025-04-20",
            task: "Refactored legacy code without tools",
        },
    ],
    questions: vec![
        QuestionRecord::new(
            "What is prompt engineering primarily used for in AI development?",
            [
                "A. Tuning database queries",
                "B. Designing ML models",
                "C. Structuring input to get desired AI output",
                "D. Frontend design",
            ],
            "C. Structuring input to get desired AI output",
        ),
        QuestionRecord::new(
            "Which of the following prompts will best generate Python code for an API?",
            [
                "A. Write code",
                "B. Create something",
                "C. Generate a FastAPI endpoint for user login with JWT",
                "D. Help me",
            ],
            "C. Generate a FastAPI endpoint for user login with JWT",
        ),
        QuestionRecord::new(
            "Why is 'chain-of-thought' prompting useful in coding?",
            [
                "A. It makes the AI guess randomly",
                "B. It breaks the request into logical steps for better results",
                "C. It formats the code",
                "D. It optimizes memory",
            ],
            "B. It breaks the request into logical steps for better results",
        ),
        QuestionRecord::new(
            "How can you use prompt engineering to automate unit test generation?",
            [
                "A. Tell the model to ‘write tests’",
                "B. Feed the function and say: ‘Generate pytest tests with mocks for this function’",
                "C. Ask it to debug",
                "D. Use @pytest decorator",
            ],
            "B. Feed the function and say: ‘Generate pytest tests with mocks for this function’",
        ),
        QuestionRecord::new(
            "Which of these improves prompt clarity the most?",
            [
                "A. Vague instructions",
                "B. Technical terms only",
                "C. Examples and constraints",
                "D. Asking ‘please’",
            ],
            "C. Examples and constraints",
        ),
        QuestionRecord::new(
            "Prompt engineering is most useful in which phase?",
            [
                "A. Code compilation",
                "B. Project deployment",
                "C. Code generation, data analysis, and documentation",
                "D. Network setup",
            ],
            "C. Code generation, data analysis, and documentation",
        ),
        QuestionRecord::new(
            "What prompt would best extract key functions from a Python file?",
            [
                "A. Summarize file",
                "B. Analyze",
                "C. List key functions with docstrings and explain their purpose",
                "D. Explain",
            ],
            "C. List key functions with docstrings and explain their purpose",
        ),
    ],
    metric_labels: MetricLabels {
        dashboard_title: "📈 Developer Engagement Dashboard",
        monotony: "🧠 Monotony Score",
        productivity: "⚙️ Productivity",
        skill: "💡 Skill Growth",
        breakdown_title: "📊 Developer Skill Wheel",
    },
    metrics_before: MetricsSnapshot::new(78, 70, 60)
        .with_category("Debugging", 60)
        .with_category("Prompting", 30)
        .with_category("Scripting", 50)
        .with_category("Automation", 40),
    metrics_after: MetricsSnapshot::new(65, 85, 80),
    generation_steps: vec![
        "⏳ Fetching recent dev activities...",
        "🧠 Creating challenge using IBM Granite...",
    ],
    initialization_steps: vec![
        "📂 Reviewing your manual development tasks...",
        "🤖 Initializing prompt-based alternatives...",
        "📦 Packaging your personalized challenge...",
    ],
    skill_application_question: "Would you apply prompt engineering for Python tasks now?",
    skill_application_choices: vec![
        SkillApplicationChoice {
            choice: "Yes",
            response: "🚀 Let’s go! You’re on your way to faster development with AI.",
        },
        SkillApplicationChoice {
            choice: "Maybe later",
            response: "⏳ Got it. We'll remind you when you're ready.",
        },
        SkillApplicationChoice {
            choice: "No",
            response: "📌 No problem. You can always revisit this challenge.",
        },
    ],
});

pub static SPREADSHEET_USER: Lazy<ChallengeProfile> = Lazy::new(|| ChallengeProfile {
    persona: Persona::SpreadsheetUser,
    title: "🎯 TaskGene Challenge Arena",
    learner_name: "Priya",
    intro: "You're 45 minutes into Q2 Sales Data work. Feeling the monotony? \
            Powered by IBM Granite. Ready to refresh your skills?",
    video_url: "https://youtu.be/TpOIGij43AA?si=4MzDXMuis3BzjrZI",
    video_prompt: "✅ I have watched the course video and I'm ready for the aptitude challenge",
    start_label: "🚀 Generate Challenge Questions (IBM Granite)",
    badge_name: "Excel Intermediate",
    pass_threshold: DEFAULT_PASS_THRESHOLD,
    retake_policy: RetakePolicy::KeepVideoConfirmation,
    history: vec![
        HistoryEntry {
            date: "2025-04-18",
            task: "7 hours of manual invoice reconciliation",
        },
        HistoryEntry {
            date: "2025-04-19",
            task: "6.5 hours updating Excel P&L statements",
        },
        HistoryEntry {
            date: "2025-04-20",
            task: "7.5 hours data entry: quarterly sales numbers",
        },
    ],
    questions: vec![
        QuestionRecord::new(
            "Which Excel function is best for looking up a value in a table?",
            ["A. SUM", "B. VLOOKUP", "C. COUNT", "D. IF"],
            "B. VLOOKUP",
        ),
        QuestionRecord::new(
            "What does the CONCAT function do in Excel?",
            [
                "A. Adds numbers",
                "B. Joins text strings",
                "C. Counts cells",
                "D. Finds maximum",
            ],
            "B. Joins text strings",
        ),
        QuestionRecord::new(
            "Which chart type is best for showing trends over time?",
            ["A. Pie Chart", "B. Line Chart", "C. Bar Chart", "D. Scatter Plot"],
            "B. Line Chart",
        ),
        QuestionRecord::new(
            "What is the default file extension for Excel files?",
            ["A. .docx", "B. .xls", "C. .xlsx", "D. .csv"],
            "C. .xlsx",
        ),
        QuestionRecord::new(
            "Which function counts only numeric values?",
            ["A. COUNTA", "B. COUNTIF", "C. COUNT", "D. SUM"],
            "C. COUNT",
        ),
        QuestionRecord::new(
            "Which shortcut saves a workbook in Excel?",
            ["A. Ctrl+S", "B. Ctrl+V", "C. Ctrl+P", "D. Ctrl+Z"],
            "A. Ctrl+S",
        ),
        QuestionRecord::new(
            "Which of these is a valid Excel cell reference?",
            ["A. 12A", "B. A12", "C. 1A2", "D. A-12"],
            "B. A12",
        ),
    ],
    metric_labels: MetricLabels {
        dashboard_title: "📈 Skill & Productivity Dashboard",
        monotony: "🧠 Monotony Score",
        productivity: "⚙️ Productivity",
        skill: "📚 Skill Engagement",
        breakdown_title: "📊 Visual Skill Tracker",
    },
    metrics_before: MetricsSnapshot::new(75, 82, 68)
        .with_category("Excel", 70)
        .with_category("Visualization", 50)
        .with_category("Automation", 30)
        .with_category("Analysis", 60),
    metrics_after: MetricsSnapshot::new(70, 85, 78),
    generation_steps: GENERATION_STEPS.to_vec(),
    initialization_steps: INITIALIZATION_STEPS.to_vec(),
    skill_application_question:
        "Would you like to use this Excel skill in your current or upcoming tasks?",
    skill_application_choices: workflow_choices(),
});

/// All quiz personas, in navigation order.
pub fn all_challenges() -> [&'static ChallengeProfile; 3] {
    [&*CUSTOMER_CARE, &*DEVELOPER, &*SPREADSHEET_USER]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::question::validate_bank;

    #[test]
    fn every_bank_satisfies_integrity_checks() {
        for challenge in all_challenges() {
            validate_bank(&challenge.questions)
                .unwrap_or_else(|e| panic!("{} bank is invalid: {}", challenge.persona, e));
        }
    }

    #[test]
    fn bank_sizes_and_thresholds_match_personas() {
        assert_eq!(CUSTOMER_CARE.questions.len(), 5);
        assert_eq!(DEVELOPER.questions.len(), 7);
        assert_eq!(SPREADSHEET_USER.questions.len(), 7);
        assert!(all_challenges()
            .iter()
            .all(|c| c.pass_threshold == DEFAULT_PASS_THRESHOLD));
    }

    #[test]
    fn before_snapshots_carry_four_categories() {
        for challenge in all_challenges() {
            assert_eq!(challenge.metrics_before.categories.len(), 4);
            assert!(!challenge.initialization_steps.is_empty());
            assert!(!challenge.skill_application_choices.is_empty());
        }
    }
}
