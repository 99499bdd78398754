//! Snapshot store
//!
//! In-memory registry of pipeline snapshots keyed by pipeline name. Writers
//! take the lock exclusively; derivation only ever holds the read lock.

use lumen_core::clock::Clock;
use lumen_core::domain::display::DisplayDescriptor;
use lumen_core::domain::pipeline::PipelineSnapshot;
use lumen_core::reducer;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshots: Arc<RwLock<HashMap<String, PipelineSnapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a snapshot unless one with the same name exists.
    /// Returns true if inserted.
    pub async fn insert_if_absent(&self, snapshot: PipelineSnapshot) -> bool {
        let mut snapshots = self.snapshots.write().await;
        if snapshots.contains_key(snapshot.name()) {
            return false;
        }
        snapshots.insert(snapshot.name().to_string(), snapshot);
        true
    }

    /// Mutates the named snapshot, creating it with `create` first if missing
    pub async fn upsert_with<C, F, R>(&self, name: &str, create: C, update: F) -> R
    where
        C: FnOnce() -> PipelineSnapshot,
        F: FnOnce(&mut PipelineSnapshot) -> R,
    {
        let mut snapshots = self.snapshots.write().await;
        let snapshot = snapshots.entry(name.to_string()).or_insert_with(create);
        update(snapshot)
    }

    /// Mutates the named snapshot if it exists
    pub async fn update<F, R>(&self, name: &str, update: F) -> Option<R>
    where
        F: FnOnce(&mut PipelineSnapshot) -> R,
    {
        let mut snapshots = self.snapshots.write().await;
        snapshots.get_mut(name).map(update)
    }

    pub async fn get(&self, name: &str) -> Option<PipelineSnapshot> {
        self.snapshots.read().await.get(name).cloned()
    }

    /// All snapshots, sorted by team then pipeline name
    pub async fn list(&self) -> Vec<PipelineSnapshot> {
        let mut list: Vec<PipelineSnapshot> =
            self.snapshots.read().await.values().cloned().collect();
        list.sort_by(|a, b| (a.team(), a.name()).cmp(&(b.team(), b.name())));
        list
    }

    pub async fn remove(&self, name: &str) -> bool {
        self.snapshots.write().await.remove(name).is_some()
    }

    pub async fn len(&self) -> usize {
        self.snapshots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.snapshots.read().await.is_empty()
    }

    /// Derives one descriptor per snapshot, sorted by team then pipeline name
    pub async fn derive_all(&self, clock: &dyn Clock) -> Vec<DisplayDescriptor> {
        let mut board: Vec<DisplayDescriptor> = {
            let snapshots = self.snapshots.read().await;
            snapshots
                .values()
                .map(|snapshot| reducer::derive(snapshot, clock))
                .collect()
        };

        board.sort_by(|a, b| (&a.team, &a.pipeline).cmp(&(&b.team, &b.pipeline)));
        board
    }
}
