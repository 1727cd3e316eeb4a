//! Persistence layer for profiles and sharing history.
//!
//! This module handles all redb operations including:
//! - Profile storage (ProfileId → VersionedProfile)
//! - The active-profile pointer and maintenance stamp (JSON strings)
//! - The time-ordered share-history table

use redb::{ReadableDatabase, ReadableTable, TableDefinition};
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

use crate::store::error::StoreError;
use crate::types::history::versioned_event::{VersionedEvent, latest_event};
use crate::types::metadata::{ActiveProfileMetadata, MaintenanceMetadata};
use crate::types::profile::versioned_profile::{VersionedProfile, latest_profile};
use crate::types::{Config, HistoryKey, Profile, ProfileId, RetentionConfig, ShareEvent};

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum StoreError {
        #[error("Database error: {0}")]
        Redb(#[from] redb::DatabaseError),

        #[error("Table error: {0}")]
        TableError(#[from] redb::TableError),

        #[error("Storage error: {0}")]
        StorageError(#[from] redb::StorageError),

        #[error("Transaction error: {0}")]
        TransactionError(#[from] redb::TransactionError),

        #[error("Commit error: {0}")]
        CommitError(#[from] redb::CommitError),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Profile not found")]
        NotFound,
    }
}

/// Profile table: ProfileId → VersionedProfile
const PROFILE_TABLE: TableDefinition<ProfileId, VersionedProfile> =
    TableDefinition::new("profiles");

/// Metadata table: &str → JSON string
const METADATA_TABLE: TableDefinition<&str, &str> = TableDefinition::new("metadata");

/// Metadata key for the active-profile pointer.
const METADATA_KEY_ACTIVE_PROFILE: &str = "active_profile";

/// Metadata key for maintenance tracking.
const METADATA_KEY_MAINTENANCE: &str = "maintenance";

/// Share-history table, sorted chronologically by key.
const HISTORY_TABLE: TableDefinition<HistoryKey, VersionedEvent> =
    TableDefinition::new("share_history");

/// The main store struct wrapping redb.
pub struct ProfileStore {
    db: redb::Database,
}

/// Result of maintenance.
#[derive(Debug, Default)]
pub struct MaintenanceOutcome {
    /// History events removed because they fell outside the retention window.
    pub events_pruned: usize,
}

impl ProfileStore {
    /// Creates or opens a store using paths from the config.
    pub fn open(config: Config) -> Result<Self, StoreError> {
        std::fs::create_dir_all(&config.base_path)?;

        let db = redb::Database::create(config.db_path())?;

        // Initialize tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PROFILE_TABLE)?;
            let _ = write_txn.open_table(METADATA_TABLE)?;
            let _ = write_txn.open_table(HISTORY_TABLE)?;
        }
        write_txn.commit()?;

        info!(path = %config.db_path().display(), "opened profile store");
        Ok(Self { db })
    }
}

/// Profile read operations.
impl ProfileStore {
    /// Retrieves a profile by id.
    pub fn get(&self, id: &ProfileId) -> Result<Option<Profile>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROFILE_TABLE)?;

        match table.get(id)? {
            None => Ok(None),
            Some(guard) => Ok(Some(Profile::from_latest_profile(
                id.clone(),
                Self::extract_latest(guard.value()),
            ))),
        }
    }

    /// Returns all stored profile ids.
    pub fn profile_ids(&self) -> Result<Vec<ProfileId>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROFILE_TABLE)?;

        let mut ids = Vec::new();
        for entry in table.iter()? {
            let (id_guard, _) = entry?;
            ids.push(id_guard.value());
        }

        Ok(ids)
    }
}

/// Profile write operations.
impl ProfileStore {
    /// Upserts a profile.
    ///
    /// `created_at` of an existing record is preserved; `updated_at` is set to
    /// `now` either way.
    pub fn save(&mut self, profile: &Profile, now: SystemTime) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;

        {
            let mut table = write_txn.open_table(PROFILE_TABLE)?;

            let created_at = table
                .get(&profile.id)?
                .map(|g| Self::extract_latest(g.value()).metadata.created_at)
                .unwrap_or(profile.metadata.created_at);

            let mut value = profile.to_latest_profile();
            value.metadata.created_at = created_at;
            value.metadata.updated_at = now;

            table.insert(&profile.id, &VersionedProfile::V1(value))?;
        }

        write_txn.commit()?;
        debug!(id = %profile.id, "saved profile");
        Ok(())
    }

    /// Permanently deletes a profile.
    ///
    /// Returns `Err(NotFound)` if the profile doesn't exist. A dangling
    /// active-profile pointer is cleared as part of the same transaction.
    pub fn remove(&mut self, id: &ProfileId) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;

        {
            let mut table = write_txn.open_table(PROFILE_TABLE)?;

            if table.remove(id)?.is_none() {
                return Err(StoreError::NotFound);
            }

            let mut meta_table = write_txn.open_table(METADATA_TABLE)?;
            let points_here = meta_table
                .get(METADATA_KEY_ACTIVE_PROFILE)?
                .and_then(|g| serde_json::from_str::<ActiveProfileMetadata>(g.value()).ok())
                .is_some_and(|meta| meta.profile_id == id.as_str());

            if points_here {
                meta_table.remove(METADATA_KEY_ACTIVE_PROFILE)?;
            }
        }

        write_txn.commit()?;
        Ok(())
    }
}

/// Active-profile operations.
impl ProfileStore {
    /// Marks a profile as the one offered for sharing.
    ///
    /// Returns `Err(NotFound)` if the profile doesn't exist.
    pub fn set_active_profile(&mut self, id: &ProfileId) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;

        {
            let table = write_txn.open_table(PROFILE_TABLE)?;
            if table.get(id)?.is_none() {
                return Err(StoreError::NotFound);
            }

            let metadata = ActiveProfileMetadata {
                profile_id: id.to_string(),
            };
            let json = serde_json::to_string(&metadata).expect("serialization failed");
            let mut meta_table = write_txn.open_table(METADATA_TABLE)?;
            meta_table.insert(METADATA_KEY_ACTIVE_PROFILE, json.as_str())?;
        }

        write_txn.commit()?;
        Ok(())
    }

    /// Returns the active profile id, if one is set.
    pub fn active_profile_id(&self) -> Option<ProfileId> {
        let read_txn = self.db.begin_read().ok()?;
        let table = read_txn.open_table(METADATA_TABLE).ok()?;
        let guard = table.get(METADATA_KEY_ACTIVE_PROFILE).ok()??;
        let metadata: ActiveProfileMetadata = serde_json::from_str(guard.value()).ok()?;
        ProfileId::try_from(metadata.profile_id.as_str()).ok()
    }

    /// Loads the profile the active pointer designates, if any.
    pub fn load_active(&self) -> Result<Option<Profile>, StoreError> {
        match self.active_profile_id() {
            None => Ok(None),
            Some(id) => self.get(&id),
        }
    }
}

/// Share-history operations.
impl ProfileStore {
    /// Appends one exchange to the history.
    pub fn record_share(&mut self, event: &ShareEvent) -> Result<(), StoreError> {
        let write_txn = self.db.begin_write()?;

        {
            let mut table = write_txn.open_table(HISTORY_TABLE)?;

            // Next free seq at this exact timestamp. Timestamps may arrive out
            // of order (clock adjustments, late-recorded received events), so
            // the table-wide last key is not a safe source.
            let from = HistoryKey {
                timestamp: event.occurred_at,
                seq: 0,
            };
            let to = HistoryKey {
                timestamp: event.occurred_at,
                seq: u64::MAX,
            };
            let seq = table
                .range(from..=to)?
                .next_back()
                .transpose()?
                .map(|(key_guard, _)| key_guard.value().seq + 1)
                .unwrap_or(0);

            let key = HistoryKey {
                timestamp: event.occurred_at,
                seq,
            };
            table.insert(&key, &VersionedEvent::V1(event.to_latest_event()))?;
        }

        write_txn.commit()?;
        debug!(profile = %event.profile, "recorded share event");
        Ok(())
    }

    /// Returns up to `limit` events, most recent first.
    pub fn share_history(&self, limit: usize) -> Result<Vec<ShareEvent>, StoreError> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(HISTORY_TABLE)?;

        let mut events = Vec::new();
        for entry in table.iter()?.rev().take(limit) {
            let (key_guard, value_guard) = entry?;
            let key = key_guard.value();
            let event = Self::extract_latest_event(value_guard.value());
            events.push(ShareEvent::from_latest_event(key.timestamp, event));
        }

        Ok(events)
    }

    /// Removes events older than the retention window. Returns the number
    /// removed.
    ///
    /// An event is expired if `occurred_at + history_ttl <= now`.
    pub fn prune_history(
        &mut self,
        now: SystemTime,
        retention: RetentionConfig,
    ) -> Result<usize, StoreError> {
        let write_txn = self.db.begin_write()?;
        let mut pruned = 0;

        {
            let mut table = write_txn.open_table(HISTORY_TABLE)?;

            let mut expired = Vec::new();
            for entry in table.iter()? {
                let (key_guard, _) = entry?;
                let key = key_guard.value();

                let expires_at = key.timestamp + retention.history_ttl;
                if expires_at <= now {
                    expired.push(key);
                } else {
                    // Table is sorted by timestamp, so we can stop early
                    break;
                }
            }

            for key in expired {
                table.remove(&key)?;
                pruned += 1;
            }
        }

        write_txn.commit()?;
        Ok(pruned)
    }
}

/// Maintenance operations.
impl ProfileStore {
    /// Prunes expired history and updates the last_run_at timestamp.
    pub fn maintenance(
        &mut self,
        now: SystemTime,
        retention: RetentionConfig,
    ) -> Result<MaintenanceOutcome, StoreError> {
        let events_pruned = self.prune_history(now, retention)?;

        self.set_maintenance_metadata(&MaintenanceMetadata {
            last_run_at: Some(now),
        })?;

        info!(events_pruned, "maintenance complete");
        Ok(MaintenanceOutcome { events_pruned })
    }

    /// Returns true if maintenance should run (never run or interval elapsed).
    pub fn should_run_maintenance(&self, now: SystemTime, interval: Duration) -> bool {
        match self.last_maintenance_at() {
            None => true,
            Some(last) => now
                .duration_since(last)
                .map(|d| d >= interval)
                .unwrap_or(true),
        }
    }

    fn last_maintenance_at(&self) -> Option<SystemTime> {
        self.get_maintenance_metadata()?.last_run_at
    }

    fn get_maintenance_metadata(&self) -> Option<MaintenanceMetadata> {
        let read_txn = self.db.begin_read().ok()?;
        let table = read_txn.open_table(METADATA_TABLE).ok()?;
        let guard = table.get(METADATA_KEY_MAINTENANCE).ok()??;
        serde_json::from_str(guard.value()).ok()
    }

    fn set_maintenance_metadata(
        &mut self,
        metadata: &MaintenanceMetadata,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(metadata).expect("serialization failed");
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(METADATA_TABLE)?;
            table.insert(METADATA_KEY_MAINTENANCE, json.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Internal helpers.
impl ProfileStore {
    fn extract_latest(versioned: VersionedProfile) -> latest_profile::Profile {
        match versioned {
            VersionedProfile::V1(v) => v,
        }
    }

    fn extract_latest_event(versioned: VersionedEvent) -> latest_event::Event {
        match versioned {
            VersionedEvent::V1(v) => v,
        }
    }
}

#[cfg(test)]
mod tests;
