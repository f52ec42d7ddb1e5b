use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use thiserror::Error;
use tracing::debug;

use crate::Profile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("profile id is required to save")]
    MissingId,
}

/// Persistence port for profiles. Scoring code never touches this; only the
/// API layer (and whatever replaces it) needs durability, injected as a
/// trait object so the backing medium stays swappable.
pub trait ProfileStore: Send + Sync {
    fn load(&self, id: &str) -> Result<Option<Profile>, StoreError>;
    fn save(&self, profile: &Profile) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<Profile>, StoreError>;
    fn remove(&self, id: &str) -> Result<bool, StoreError>;
}

/// In-memory store for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, Profile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().expect("store lock poisoned").get(id).cloned())
    }

    fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        let id = profile.trimmed_id().ok_or(StoreError::MissingId)?.to_string();
        self.profiles
            .write()
            .expect("store lock poisoned")
            .insert(id, profile.clone());
        Ok(())
    }

    fn list(&self) -> Result<Vec<Profile>, StoreError> {
        let mut profiles: Vec<_> = self
            .profiles
            .read()
            .expect("store lock poisoned")
            .values()
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(profiles)
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self
            .profiles
            .write()
            .expect("store lock poisoned")
            .remove(id)
            .is_some())
    }
}

/// Single-document JSON store: the whole profile map lives in one file,
/// loaded eagerly on open and rewritten atomically on every mutation
/// (temp file + rename, so a crash never leaves a torn document).
pub struct JsonFileStore {
    path: PathBuf,
    profiles: RwLock<HashMap<String, Profile>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let profiles = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        debug!(path = %path.display(), profiles = profiles.len(), "profile store opened");

        Ok(Self {
            path,
            profiles: RwLock::new(profiles),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, profiles: &HashMap<String, Profile>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut tmp = std::fs::File::create(&tmp_path)?;
            tmp.write_all(serde_json::to_string_pretty(profiles)?.as_bytes())?;
            tmp.sync_all()?;
        }
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl ProfileStore for JsonFileStore {
    fn load(&self, id: &str) -> Result<Option<Profile>, StoreError> {
        Ok(self.profiles.read().expect("store lock poisoned").get(id).cloned())
    }

    fn save(&self, profile: &Profile) -> Result<(), StoreError> {
        let id = profile.trimmed_id().ok_or(StoreError::MissingId)?.to_string();
        let mut profiles = self.profiles.write().expect("store lock poisoned");
        profiles.insert(id, profile.clone());
        self.persist(&profiles)
    }

    fn list(&self) -> Result<Vec<Profile>, StoreError> {
        let mut profiles: Vec<_> = self
            .profiles
            .read()
            .expect("store lock poisoned")
            .values()
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(profiles)
    }

    fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut profiles = self.profiles.write().expect("store lock poisoned");
        let removed = profiles.remove(id).is_some();
        if removed {
            self.persist(&profiles)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> Profile {
        Profile {
            id: Some(id.into()),
            skills: vec!["Rust".into()],
            ..Profile::default()
        }
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        store.save(&profile("p1")).unwrap();

        let loaded = store.load("p1").unwrap().unwrap();
        assert_eq!(loaded.skills, vec!["Rust".to_string()]);
        assert!(store.load("missing").unwrap().is_none());
        assert!(store.remove("p1").unwrap());
        assert!(!store.remove("p1").unwrap());
    }

    #[test]
    fn save_without_id_is_rejected() {
        let store = MemoryStore::new();
        let err = store.save(&Profile::default()).unwrap_err();
        assert!(matches!(err, StoreError::MissingId));
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.save(&profile("p1")).unwrap();
            store.save(&profile("p2")).unwrap();
            store.remove("p2").unwrap();
        }

        let reopened = JsonFileStore::open(&path).unwrap();
        assert!(reopened.load("p1").unwrap().is_some());
        assert!(reopened.load("p2").unwrap().is_none());
        assert_eq!(reopened.list().unwrap().len(), 1);
    }

    #[test]
    fn file_store_opens_missing_file_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nope.json")).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn file_store_rejects_corrupt_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profiles.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Serde(_))));
    }

    #[test]
    fn list_is_sorted_by_id() {
        let store = MemoryStore::new();
        store.save(&profile("b")).unwrap();
        store.save(&profile("a")).unwrap();

        let ids: Vec<_> = store.list().unwrap().into_iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }
}
