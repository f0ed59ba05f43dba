use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Lifecycle state of a named subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubsystemStatus {
    Starting,
    Good,
    Bad,
    ShuttingDown,
    Shutdown,
}

#[derive(Debug, Clone)]
struct StatusEntry {
    status: SubsystemStatus,
    changed_at: DateTime<Utc>,
}

/// Process-wide table of subsystem health states.
///
/// Every subsystem writes its own key and the health endpoint reads all keys.
/// The handle is cheap to clone; pass one to each subsystem at construction.
/// Contents are not persisted across restarts.
#[derive(Clone)]
pub struct SubsystemRegistry {
    statuses: Arc<RwLock<HashMap<String, StatusEntry>>>,
}

impl SubsystemRegistry {
    pub fn new() -> Self {
        Self {
            statuses: Arc::new(RwLock::new(HashMap::with_capacity(8))),
        }
    }

    /// Publish a subsystem's status, overwriting any previous entry.
    pub async fn set(&self, name: &str, status: SubsystemStatus) {
        let mut statuses = self.statuses.write().await;
        let previous = statuses.insert(
            name.to_string(),
            StatusEntry {
                status,
                changed_at: Utc::now(),
            },
        );

        match previous {
            Some(entry) if entry.status != status => {
                let held = Utc::now().signed_duration_since(entry.changed_at);
                info!(
                    "Subsystem {} status: {:?} -> {:?} (after {}s)",
                    name,
                    entry.status,
                    status,
                    held.num_seconds()
                );
            }
            None => {
                info!("Subsystem {} registered with status {:?}", name, status);
            }
            _ => {}
        }
    }

    /// Snapshot of every registered subsystem and its current status.
    pub async fn get_all(&self) -> HashMap<String, SubsystemStatus> {
        let statuses = self.statuses.read().await;
        statuses
            .iter()
            .map(|(name, entry)| (name.clone(), entry.status))
            .collect()
    }

    pub async fn get(&self, name: &str) -> Option<SubsystemStatus> {
        let statuses = self.statuses.read().await;
        statuses.get(name).map(|entry| entry.status)
    }
}

impl Default for SubsystemRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_roundtrip() {
        tokio_test::block_on(async {
            let registry = SubsystemRegistry::new();
            registry.set("HTTPServer", SubsystemStatus::Starting).await;

            assert_eq!(
                registry.get("HTTPServer").await,
                Some(SubsystemStatus::Starting)
            );
            assert_eq!(registry.get("missing").await, None);
        });
    }

    #[test]
    fn test_set_overwrites_previous_status() {
        tokio_test::block_on(async {
            let registry = SubsystemRegistry::new();
            registry.set("HTTPServer", SubsystemStatus::Starting).await;
            registry.set("HTTPServer", SubsystemStatus::Good).await;

            let all = registry.get_all().await;
            assert_eq!(all.len(), 1);
            assert_eq!(all["HTTPServer"], SubsystemStatus::Good);
        });
    }

    #[test]
    fn test_clones_share_state() {
        tokio_test::block_on(async {
            let registry = SubsystemRegistry::new();
            let handle = registry.clone();
            handle.set("Scheduler", SubsystemStatus::Good).await;

            assert_eq!(registry.get("Scheduler").await, Some(SubsystemStatus::Good));
        });
    }
}
