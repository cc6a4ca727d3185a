use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TEAM_MEMBERS: [&str; 12] = [
    "Priya",
    "Arjun Mehta",
    "Sneha Iyer",
    "Rahul Verma",
    "Aisha Khan",
    "Karan Patel",
    "Neha Reddy",
    "Vikram Das",
    "Divya Nair",
    "Rohit Sen",
    "Meera Joseph",
    "Ankit Rao",
];

pub const SKILL_COLUMNS: [&str; 4] = ["Excel", "Python", "Viz", "Reporting"];

const TREND_WEEKS: i64 = 6;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamMember {
    pub name: String,
    pub monotony: i32,
    pub productivity: i32,
    /// Credential counts, aligned with [`SKILL_COLUMNS`].
    pub skills: Vec<i32>,
}

impl TeamMember {
    pub fn skill_summary(&self) -> String {
        let pairs: Vec<String> = SKILL_COLUMNS
            .iter()
            .zip(&self.skills)
            .map(|(column, value)| format!("{}: {}", column, value))
            .collect();
        format!("{{{}}}", pairs.join(", "))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WeeklyTrend {
    pub week: NaiveDate,
    pub avg_monotony: i32,
    pub avg_productivity: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WorkloadItem {
    pub task: String,
    pub hours: i32,
}

/// Team figures drawn once per manager page load and shared by its sections.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TeamSnapshot {
    pub id: Uuid,
    pub members: Vec<TeamMember>,
    pub weekly_trends: Vec<WeeklyTrend>,
    pub generated_at: DateTime<Utc>,
}

impl TeamSnapshot {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Self {
        let members = TEAM_MEMBERS
            .iter()
            .map(|name| TeamMember {
                name: name.to_string(),
                monotony: rng.gen_range(35..=85),
                productivity: rng.gen_range(65..=100),
                skills: SKILL_COLUMNS.iter().map(|_| rng.gen_range(0..10)).collect(),
            })
            .collect();

        let last_week = last_week_ending(today);
        let weekly_trends = (0..TREND_WEEKS)
            .rev()
            .map(|weeks_back| WeeklyTrend {
                week: last_week - Duration::weeks(weeks_back),
                avg_monotony: rng.gen_range(45..=75),
                avg_productivity: rng.gen_range(60..=95),
            })
            .collect();

        TeamSnapshot {
            id: Uuid::new_v4(),
            members,
            weekly_trends,
            generated_at: Utc::now(),
        }
    }

    pub fn member(&self, name: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.name == name)
    }
}

/// Most recent Sunday on or before `today`.
fn last_week_ending(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_sunday()))
}

pub fn workload_distribution<R: Rng + ?Sized>(rng: &mut R) -> Vec<WorkloadItem> {
    [
        ("Reporting", 10, 25),
        ("Excel Analysis", 10, 20),
        ("Email Management", 5, 15),
        ("Client Calls", 5, 10),
        ("Ad Hoc Tasks", 5, 10),
    ]
    .into_iter()
    .map(|(task, low, high)| WorkloadItem {
        task: task.to_string(),
        hours: rng.gen_range(low..=high),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use rand::{rngs::StdRng, SeedableRng};

    fn snapshot() -> TeamSnapshot {
        let mut rng = StdRng::seed_from_u64(7);
        let today = NaiveDate::from_ymd_opt(2025, 4, 23).expect("valid date");
        TeamSnapshot::generate(&mut rng, today)
    }

    #[test]
    fn generated_scores_stay_in_range() {
        let snapshot = snapshot();

        assert_eq!(snapshot.members.len(), TEAM_MEMBERS.len());
        for member in &snapshot.members {
            assert!((35..=85).contains(&member.monotony));
            assert!((65..=100).contains(&member.productivity));
            assert_eq!(member.skills.len(), SKILL_COLUMNS.len());
            assert!(member.skills.iter().all(|s| (0..10).contains(s)));
        }
    }

    #[test]
    fn weekly_trends_end_on_last_sunday() {
        let snapshot = snapshot();

        assert_eq!(snapshot.weekly_trends.len(), 6);
        let last = snapshot.weekly_trends.last().expect("six weeks");
        assert_eq!(last.week, NaiveDate::from_ymd_opt(2025, 4, 20).expect("valid date"));
        assert!(snapshot
            .weekly_trends
            .iter()
            .all(|t| t.week.weekday() == Weekday::Sun));
        assert!(snapshot
            .weekly_trends
            .windows(2)
            .all(|w| w[1].week - w[0].week == Duration::weeks(1)));
    }

    #[test]
    fn sunday_is_its_own_week_ending() {
        let sunday = NaiveDate::from_ymd_opt(2025, 4, 20).expect("valid date");
        assert_eq!(last_week_ending(sunday), sunday);
    }

    #[test]
    fn skill_summary_lists_columns_in_order() {
        let member = TeamMember {
            name: "Priya".to_string(),
            monotony: 50,
            productivity: 80,
            skills: vec![1, 2, 3, 4],
        };

        assert_eq!(
            member.skill_summary(),
            "{Excel: 1, Python: 2, Viz: 3, Reporting: 4}"
        );
    }

    #[test]
    fn workload_has_five_tasks_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let workload = workload_distribution(&mut rng);

        assert_eq!(workload.len(), 5);
        assert!((10..=25).contains(&workload[0].hours));
        assert!((5..=10).contains(&workload[4].hours));
    }
}
