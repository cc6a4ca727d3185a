pub mod manager_section;
pub mod metrics;
pub mod persona;
pub mod question;
pub mod score;
pub mod session;
pub mod team;
pub use manager_section::ManagerSection;
pub use metrics::{MetricsPanel, MetricsSnapshot};
pub use persona::{ChallengeProfile, Persona};
pub use question::QuestionRecord;
pub use score::ScoreResult;
pub use session::{ChallengeSession, SessionEvent, SessionPhase, SessionState};
pub use team::TeamSnapshot;
