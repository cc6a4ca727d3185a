use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{errors::AppResult, models::domain::TeamSnapshot};

/// Team snapshots keyed by manager page load.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamSnapshotRepository: Send + Sync {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<TeamSnapshot>>;
    async fn save(&self, snapshot: TeamSnapshot) -> AppResult<TeamSnapshot>;
}

#[derive(Default, Clone)]
pub struct InMemoryTeamSnapshotRepository {
    snapshots: Arc<RwLock<HashMap<Uuid, TeamSnapshot>>>,
}

impl InMemoryTeamSnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamSnapshotRepository for InMemoryTeamSnapshotRepository {
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<TeamSnapshot>> {
        let snapshots = self.snapshots.read().await;
        Ok(snapshots.get(id).cloned())
    }

    async fn save(&self, snapshot: TeamSnapshot) -> AppResult<TeamSnapshot> {
        let mut snapshots = self.snapshots.write().await;
        snapshots.insert(snapshot.id, snapshot.clone());
        Ok(snapshot)
    }
}
