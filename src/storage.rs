//! Key/value persistence. The browser build talks to localStorage; tests use
//! the in-memory store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::Profile;

pub const KEY_PROFILES: &str = "encode_profiles";
pub const KEY_THEME: &str = "encode_theme";
pub const KEY_SIMPLE_MODE: &str = "encode_simple_mode";
pub const KEY_REMOVE_EFFECTS: &str = "encode_remove_effects";
pub const KEY_RED_TEAM: &str = "encode_red_team";
pub const KEY_RED_TEAM_REVEALED: &str = "encode_red_team_revealed";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let store = Self::storage().ok_or(StorageError::Unavailable)?;
        store.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Shared store handle suitable for a Yew context.
#[derive(Clone)]
pub struct StorageHandle(pub Rc<dyn KeyValueStore>);

impl StorageHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl PartialEq for StorageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for StorageHandle {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub fn read_bool(store: &dyn KeyValueStore, key: &str) -> bool {
    store.get(key).is_some_and(|v| v == "true")
}

pub fn write_bool(store: &dyn KeyValueStore, key: &str, value: bool) -> Result<(), StorageError> {
    store.set(key, if value { "true" } else { "false" })
}

/// Missing data loads as an empty roster. Records are decoded one by one and
/// an unreadable record is skipped without losing the rest.
pub fn load_profiles(store: &dyn KeyValueStore) -> Vec<Profile> {
    let Some(raw) = store.get(KEY_PROFILES) else {
        return Vec::new();
    };
    let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("unreadable profile list left in storage: {e}");
            return Vec::new();
        }
    };
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, entry)| match serde_json::from_value::<Profile>(entry) {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!("skipping unreadable profile record {i}: {e}");
                None
            }
        })
        .collect()
}

/// Writes the full list in one call so a save is never partial.
pub fn save_profiles(store: &dyn KeyValueStore, profiles: &[Profile]) -> Result<(), StorageError> {
    let raw = serde_json::to_string(profiles)?;
    store.set(KEY_PROFILES, &raw)
}

/// Tracks what the stored roster holds so only real changes are written.
/// The list that was just loaded is never written back, so data this build
/// cannot read stays in storage until the player changes something.
#[derive(Debug, Default)]
pub struct ProfileSync {
    saved: Vec<Profile>,
}

impl ProfileSync {
    pub fn load(&mut self, store: &dyn KeyValueStore) -> Vec<Profile> {
        self.saved = load_profiles(store);
        self.saved.clone()
    }

    /// Returns whether a write happened.
    pub fn sync(&mut self, store: &dyn KeyValueStore, profiles: &[Profile]) -> Result<bool, StorageError> {
        if self.saved == profiles {
            return Ok(false);
        }
        save_profiles(store, profiles)?;
        self.saved = profiles.to_vec();
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_survive_a_save_load_cycle() {
        let store = MemoryStore::new();
        let mut p = Profile::new("1", "USR_1", 10);
        p.levels_completed = 4;
        p.fastest_clear = Some(42);
        save_profiles(&store, &[p.clone()]).unwrap();
        assert_eq!(load_profiles(&store), vec![p]);
    }

    #[test]
    fn corrupt_profile_data_loads_empty() {
        let store = MemoryStore::new();
        store.set(KEY_PROFILES, "{not a list").unwrap();
        assert!(load_profiles(&store).is_empty());
    }

    #[test]
    fn one_bad_record_does_not_drop_the_list() {
        let store = MemoryStore::new();
        store
            .set(KEY_PROFILES, r#"[{"id":"1","name":"USR_1","levelsCompleted":3},{"name":"no id"},{"id":"2","name":"USR_2"}]"#)
            .unwrap();
        let ids: Vec<String> = load_profiles(&store).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn loaded_roster_is_not_written_back() {
        let store = MemoryStore::new();
        let raw = r#"[{"id":"1","name":"USR_1","fastestClear":"--:--","unknownField":true}]"#;
        store.set(KEY_PROFILES, raw).unwrap();
        let mut sync = ProfileSync::default();
        let loaded = sync.load(&store);
        assert!(!sync.sync(&store, &loaded).unwrap());
        assert_eq!(store.get(KEY_PROFILES).as_deref(), Some(raw));

        let mut changed = loaded.clone();
        changed[0].retention_best = 4;
        assert!(sync.sync(&store, &changed).unwrap());
        assert_eq!(load_profiles(&store), changed);
    }

    #[test]
    fn unreadable_blob_survives_startup() {
        let store = MemoryStore::new();
        store.set(KEY_PROFILES, "{not a list").unwrap();
        let mut sync = ProfileSync::default();
        let loaded = sync.load(&store);
        assert!(loaded.is_empty());
        assert!(!sync.sync(&store, &loaded).unwrap());
        assert_eq!(store.get(KEY_PROFILES).as_deref(), Some("{not a list"));
    }

    #[test]
    fn booleans_are_stored_as_strings() {
        let store = MemoryStore::new();
        assert!(!read_bool(&store, KEY_RED_TEAM));
        write_bool(&store, KEY_RED_TEAM, true).unwrap();
        assert_eq!(store.get(KEY_RED_TEAM).as_deref(), Some("true"));
        assert!(read_bool(&store, KEY_RED_TEAM));
    }
}
