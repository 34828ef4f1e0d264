use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{AppRegistry, FailureSwitch};
use crate::config::FixtureConfig;
use crate::modules::{
    ApplicationDescription, ModuleError, Tracker, TrackerStatistics, TrackersPrivacyModule,
};

struct TrackerEntry {
    tracker: Tracker,
    uids: Vec<u32>,
    calls: u64,
    blocked_calls: u64,
}

struct BlockerTables {
    trackers: BTreeMap<String, TrackerEntry>,
    blocked: HashSet<(u32, String)>,
    whitelisted: HashSet<u32>,
    blocking_enabled: bool,
}

/// Simulated system tracker blocker.
pub struct MemoryTrackers {
    registry: AppRegistry,
    tables: Mutex<BlockerTables>,
    failures: FailureSwitch,
}

impl MemoryTrackers {
    pub fn new(registry: AppRegistry, fixtures: &FixtureConfig) -> Self {
        let uid_of = |package: &String| registry.by_package(package).ok().map(|app| app.uid);

        let mut trackers = BTreeMap::new();
        let mut blocked = HashSet::new();
        for fixture in &fixtures.trackers {
            let uids = fixture.apps.iter().filter_map(uid_of).collect();
            for uid in fixture.blocked.iter().filter_map(uid_of) {
                blocked.insert((uid, fixture.id.clone()));
            }
            trackers.insert(
                fixture.id.clone(),
                TrackerEntry {
                    tracker: Tracker {
                        id: fixture.id.clone(),
                        name: fixture.name.clone(),
                        hostname: fixture.hostname.clone(),
                    },
                    uids,
                    calls: fixture.calls,
                    blocked_calls: fixture.blocked_calls,
                },
            );
        }
        let whitelisted = fixtures.whitelisted.iter().filter_map(uid_of).collect();

        Self {
            tables: Mutex::new(BlockerTables {
                trackers,
                blocked,
                whitelisted,
                blocking_enabled: fixtures.blocking_enabled,
            }),
            registry,
            failures: FailureSwitch::default(),
        }
    }

    pub fn failures(&self) -> &FailureSwitch {
        &self.failures
    }

    /// Whether `tracker_id` is effectively blocked for `uid` right now,
    /// taking the global switch and the whitelist into account.
    pub fn is_effectively_blocked(&self, uid: u32, tracker_id: &str) -> bool {
        let tables = self.tables.lock();
        tables.blocking_enabled
            && !tables.whitelisted.contains(&uid)
            && tables.blocked.contains(&(uid, tracker_id.to_string()))
    }

    fn unknown_tracker(tracker_id: &str) -> ModuleError {
        ModuleError::NotFound {
            what: format!("Tracker '{}'", tracker_id),
        }
    }
}

#[async_trait]
impl TrackersPrivacyModule for MemoryTrackers {
    async fn trackers(&self) -> Result<Vec<Tracker>, ModuleError> {
        self.failures.check()?;
        let tables = self.tables.lock();
        Ok(tables
            .trackers
            .values()
            .map(|entry| entry.tracker.clone())
            .collect())
    }

    async fn trackers_for_app(&self, uid: u32) -> Result<Vec<Tracker>, ModuleError> {
        self.failures.check()?;
        self.registry.by_uid(uid)?;
        let tables = self.tables.lock();
        Ok(tables
            .trackers
            .values()
            .filter(|entry| entry.uids.contains(&uid))
            .map(|entry| entry.tracker.clone())
            .collect())
    }

    async fn apps_for_tracker(
        &self,
        tracker_id: &str,
    ) -> Result<Vec<ApplicationDescription>, ModuleError> {
        self.failures.check()?;
        let tables = self.tables.lock();
        let entry = tables
            .trackers
            .get(tracker_id)
            .ok_or_else(|| Self::unknown_tracker(tracker_id))?;
        entry
            .uids
            .iter()
            .map(|uid| self.registry.by_uid(*uid))
            .collect()
    }

    async fn is_blocked(&self, uid: u32, tracker_id: &str) -> Result<bool, ModuleError> {
        self.failures.check()?;
        let tables = self.tables.lock();
        if !tables.trackers.contains_key(tracker_id) {
            return Err(Self::unknown_tracker(tracker_id));
        }
        Ok(tables.blocked.contains(&(uid, tracker_id.to_string())))
    }

    async fn set_blocked(
        &self,
        uid: u32,
        tracker_id: &str,
        blocked: bool,
    ) -> Result<(), ModuleError> {
        self.failures.check()?;
        self.registry.by_uid(uid)?;
        let mut tables = self.tables.lock();
        let entry = tables
            .trackers
            .get(tracker_id)
            .ok_or_else(|| Self::unknown_tracker(tracker_id))?;
        if !entry.uids.contains(&uid) {
            return Err(ModuleError::Rejected {
                reason: format!("App {} does not use tracker '{}'", uid, tracker_id),
            });
        }
        let key = (uid, tracker_id.to_string());
        if blocked {
            tables.blocked.insert(key);
        } else {
            tables.blocked.remove(&key);
        }
        tracing::debug!(uid, tracker_id, blocked, "Tracker block status set");
        Ok(())
    }

    async fn is_whitelisted(&self, uid: u32) -> Result<bool, ModuleError> {
        self.failures.check()?;
        Ok(self.tables.lock().whitelisted.contains(&uid))
    }

    async fn set_whitelisted(&self, uid: u32, whitelisted: bool) -> Result<(), ModuleError> {
        self.failures.check()?;
        self.registry.by_uid(uid)?;
        let mut tables = self.tables.lock();
        if whitelisted {
            tables.whitelisted.insert(uid);
        } else {
            tables.whitelisted.remove(&uid);
        }
        tracing::debug!(uid, whitelisted, "Whitelist updated");
        Ok(())
    }

    async fn is_blocking_enabled(&self) -> Result<bool, ModuleError> {
        self.failures.check()?;
        Ok(self.tables.lock().blocking_enabled)
    }

    async fn set_blocking_enabled(&self, enabled: bool) -> Result<(), ModuleError> {
        self.failures.check()?;
        self.tables.lock().blocking_enabled = enabled;
        tracing::info!(enabled, "Tracker blocking toggled");
        Ok(())
    }

    async fn statistics(&self) -> Result<TrackerStatistics, ModuleError> {
        self.failures.check()?;
        let tables = self.tables.lock();
        let mut stats = TrackerStatistics::default();
        for entry in tables.trackers.values() {
            stats.total_calls += entry.calls;
            stats.blocked_calls += entry.blocked_calls;
            let unblocked = entry.uids.iter().any(|uid| {
                !tables.blocking_enabled
                    || tables.whitelisted.contains(uid)
                    || !tables.blocked.contains(&(*uid, entry.tracker.id.clone()))
            });
            if entry.calls > 0 && unblocked {
                stats.active_trackers += 1;
            }
        }
        Ok(stats)
    }
}
