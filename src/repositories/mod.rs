pub mod session_repository;
pub mod team_snapshot_repository;

pub use session_repository::{InMemorySessionRepository, SessionRepository};
pub use team_snapshot_repository::{InMemoryTeamSnapshotRepository, TeamSnapshotRepository};
