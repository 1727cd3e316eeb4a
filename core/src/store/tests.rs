use super::*;
use crate::types::{ShareChannel, ShareDirection};
use std::time::Duration;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn create_test_store() -> (ProfileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config {
            base_path: temp_dir.path().to_path_buf(),
        };

        let store = ProfileStore::open(config).unwrap();

        (store, temp_dir)
    }

    pub(super) fn make_id(s: &str) -> ProfileId {
        ProfileId::try_from(s).unwrap()
    }

    pub(super) fn make_profile(id: &str, now: SystemTime) -> Profile {
        let mut profile = Profile::new(make_id(id), now);
        profile.name = Some(format!("{id} name"));
        profile
    }

    pub(super) fn make_event(
        profile: &ProfileId,
        occurred_at: SystemTime,
        counterpart: &str,
    ) -> ShareEvent {
        ShareEvent {
            occurred_at,
            direction: ShareDirection::Sent,
            channel: ShareChannel::Nfc,
            counterpart: Some(counterpart.to_string()),
            profile: profile.clone(),
        }
    }
}

mod profiles {
    use super::common::{create_test_store, make_id, make_profile};
    use super::*;

    #[test]
    fn test_get_nonexistent_profile() {
        let (store, _temp) = create_test_store();
        let result = store.get(&make_id("missing")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_get_roundtrip() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let profile = make_profile("primary", now);

        store.save(&profile, now).unwrap();

        let loaded = store.get(&profile.id).unwrap().unwrap();
        assert_eq!(loaded.name.as_deref(), Some("primary name"));
        assert_eq!(loaded.aesthetics, profile.aesthetics);
    }

    #[test]
    fn test_save_preserves_created_at() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let mut profile = make_profile("primary", now);

        store.save(&profile, now).unwrap();
        let first = store.get(&profile.id).unwrap().unwrap();

        let later = now + Duration::from_secs(60);
        profile.name = Some("Renamed".to_string());
        store.save(&profile, later).unwrap();

        let second = store.get(&profile.id).unwrap().unwrap();
        assert_eq!(second.metadata.created_at, first.metadata.created_at);
        assert!(second.metadata.updated_at > first.metadata.updated_at);
        assert_eq!(second.name.as_deref(), Some("Renamed"));
    }

    #[test]
    fn test_profile_ids_lists_all() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();

        store.save(&make_profile("personal", now), now).unwrap();
        store.save(&make_profile("work", now), now).unwrap();

        let ids = store.profile_ids().unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&make_id("personal")));
        assert!(ids.contains(&make_id("work")));
    }

    #[test]
    fn test_remove_profile() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let profile = make_profile("primary", now);

        store.save(&profile, now).unwrap();
        store.remove(&profile.id).unwrap();

        assert!(store.get(&profile.id).unwrap().is_none());
    }

    #[test]
    fn test_remove_nonexistent_profile_fails() {
        let (mut store, _temp) = create_test_store();
        let result = store.remove(&make_id("missing"));
        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}

mod active_profile {
    use super::common::{create_test_store, make_id, make_profile};
    use super::*;

    #[test]
    fn test_no_active_profile_initially() {
        let (store, _temp) = create_test_store();
        assert!(store.active_profile_id().is_none());
        assert!(store.load_active().unwrap().is_none());
    }

    #[test]
    fn test_set_and_load_active_profile() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let profile = make_profile("primary", now);

        store.save(&profile, now).unwrap();
        store.set_active_profile(&profile.id).unwrap();

        assert_eq!(store.active_profile_id(), Some(profile.id.clone()));

        let active = store.load_active().unwrap().unwrap();
        assert_eq!(active.id, profile.id);
    }

    #[test]
    fn test_set_active_nonexistent_profile_fails() {
        let (mut store, _temp) = create_test_store();
        let result = store.set_active_profile(&make_id("missing"));
        assert!(matches!(result, Err(StoreError::NotFound)));
    }

    #[test]
    fn test_remove_clears_dangling_pointer() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let profile = make_profile("primary", now);

        store.save(&profile, now).unwrap();
        store.set_active_profile(&profile.id).unwrap();
        store.remove(&profile.id).unwrap();

        assert!(store.active_profile_id().is_none());
        assert!(store.load_active().unwrap().is_none());
    }
}

mod history {
    use super::common::{create_test_store, make_event, make_id, make_profile};
    use super::*;
    use crate::types::RetentionConfig;

    #[test]
    fn test_share_history_most_recent_first() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let id = make_id("primary");
        store.save(&make_profile("primary", now), now).unwrap();

        for (i, name) in ["ana", "ben", "cho"].iter().enumerate() {
            let at = now + Duration::from_secs(i as u64);
            store.record_share(&make_event(&id, at, name)).unwrap();
        }

        let events = store.share_history(10).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].counterpart.as_deref(), Some("cho"));
        assert_eq!(events[1].counterpart.as_deref(), Some("ben"));
        assert_eq!(events[2].counterpart.as_deref(), Some("ana"));
    }

    #[test]
    fn test_share_history_respects_limit() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let id = make_id("primary");

        for i in 0..5u64 {
            let at = now + Duration::from_secs(i);
            store.record_share(&make_event(&id, at, "peer")).unwrap();
        }

        let events = store.share_history(2).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_events_with_equal_timestamps_are_all_kept() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let id = make_id("primary");

        store.record_share(&make_event(&id, now, "ana")).unwrap();
        store.record_share(&make_event(&id, now, "ben")).unwrap();

        let events = store.share_history(10).unwrap();
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_out_of_order_timestamps_are_all_kept() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let id = make_id("primary");

        store.record_share(&make_event(&id, now, "latest")).unwrap();
        let earlier = now - Duration::from_secs(60);
        store.record_share(&make_event(&id, earlier, "ana")).unwrap();
        store.record_share(&make_event(&id, earlier, "ben")).unwrap();

        let events = store.share_history(10).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].counterpart.as_deref(), Some("latest"));
        assert_eq!(events[1].counterpart.as_deref(), Some("ben"));
        assert_eq!(events[2].counterpart.as_deref(), Some("ana"));
    }

    #[test]
    fn test_prune_removes_only_expired_events() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let id = make_id("primary");
        let retention = RetentionConfig {
            history_ttl: Duration::from_secs(100),
        };

        store.record_share(&make_event(&id, now, "old")).unwrap();
        let recent_at = now + Duration::from_secs(90);
        store
            .record_share(&make_event(&id, recent_at, "recent"))
            .unwrap();

        let pruned = store
            .prune_history(now + Duration::from_secs(120), retention)
            .unwrap();

        assert_eq!(pruned, 1);
        let events = store.share_history(10).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].counterpart.as_deref(), Some("recent"));
    }

    #[test]
    fn test_prune_with_nothing_expired() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let id = make_id("primary");
        let retention = RetentionConfig {
            history_ttl: Duration::from_secs(100),
        };

        store.record_share(&make_event(&id, now, "peer")).unwrap();

        let pruned = store.prune_history(now, retention).unwrap();
        assert_eq!(pruned, 0);
        assert_eq!(store.share_history(10).unwrap().len(), 1);
    }
}

mod maintenance {
    use super::common::{create_test_store, make_event, make_id};
    use super::*;
    use crate::types::RetentionConfig;

    #[test]
    fn test_maintenance_prunes_and_stamps() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let id = make_id("primary");
        let retention = RetentionConfig {
            history_ttl: Duration::from_secs(10),
        };

        store.record_share(&make_event(&id, now, "old")).unwrap();

        let at = now + Duration::from_secs(11);
        let outcome = store.maintenance(at, retention).unwrap();

        assert_eq!(outcome.events_pruned, 1);
        assert!(!store.should_run_maintenance(at, Duration::from_secs(3600)));
    }

    #[test]
    fn test_should_run_maintenance_when_never_run() {
        let (store, _temp) = create_test_store();
        assert!(store.should_run_maintenance(SystemTime::now(), Duration::from_secs(3600)));
    }

    #[test]
    fn test_should_run_maintenance_after_interval() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let retention = RetentionConfig {
            history_ttl: Duration::from_secs(10),
        };

        store.maintenance(now, retention).unwrap();

        let interval = Duration::from_secs(3600);
        assert!(!store.should_run_maintenance(now + Duration::from_secs(10), interval));
        assert!(store.should_run_maintenance(now + interval, interval));
    }
}

mod editor_integration {
    use super::common::{create_test_store, make_profile};
    use super::*;
    use crate::editor::ProfileEditor;

    #[test]
    fn test_editor_save_persists_and_commits() {
        let (mut store, _temp) = create_test_store();
        let now = SystemTime::now();
        let profile = make_profile("primary", now);
        store.save(&profile, now).unwrap();

        let mut editor = ProfileEditor::load(store.get(&profile.id).unwrap().unwrap());
        editor.mutate(|p| p.name = Some("Alice Smith".to_string()));
        assert!(editor.is_dirty());

        editor.save(&mut store, now + Duration::from_secs(1)).unwrap();
        assert!(!editor.is_dirty());

        let persisted = store.get(&profile.id).unwrap().unwrap();
        assert_eq!(persisted.name.as_deref(), Some("Alice Smith"));
    }
}
