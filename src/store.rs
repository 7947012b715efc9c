//! Durable storage for the progress blob.
//!
//! Progress persists as a single JSON document per namespace, last
//! write wins. There is no versioning and no merging; the blob is small
//! enough to rewrite whole on every change.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::ClashError;
use crate::progress::PlayerProgress;

/// Namespace used when the caller does not pick one.
pub const DEFAULT_NAMESPACE: &str = "zk-card-clash-progress";

/// Backend for loading and saving the progress blob.
pub trait ProgressStore {
    /// Loads the blob for a namespace. `Ok(None)` means no save exists
    /// yet, which is not an error.
    fn load(&self, namespace: &str) -> Result<Option<PlayerProgress>, ClashError>;

    /// Writes the blob for a namespace, replacing whatever was there.
    fn save(&mut self, namespace: &str, progress: &PlayerProgress) -> Result<(), ClashError>;
}

/// Stores each namespace as `<base_dir>/<namespace>.json`.
///
/// Writes go to a sibling temp file first and land with a rename, so a
/// crash mid-save leaves the previous blob intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// A store rooted at the given directory. The directory is created
    /// on first save, not here.
    pub fn new(base_dir: impl Into<PathBuf>) -> FileStore {
        FileStore {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, namespace: &str) -> PathBuf {
        self.base_dir.join(format!("{namespace}.json"))
    }
}

impl ProgressStore for FileStore {
    fn load(&self, namespace: &str) -> Result<Option<PlayerProgress>, ClashError> {
        let path = self.path_for(namespace);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, namespace: &str, progress: &PlayerProgress) -> Result<(), ClashError> {
        fs::create_dir_all(&self.base_dir)?;
        let path = self.path_for(namespace);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(progress)?)?;
        fs::rename(&tmp, &path)?;
        log::debug!("[STORE] saved `{namespace}` to {}", path.display());
        Ok(())
    }
}

/// Keeps blobs in memory, for tests and throwaway sessions.
///
/// Clones share the same underlying map, so a test can hold one handle
/// while the controller owns another and watch saves appear.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blobs: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self, namespace: &str) -> Result<Option<PlayerProgress>, ClashError> {
        match self.blobs.borrow().get(namespace) {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, namespace: &str, progress: &PlayerProgress) -> Result<(), ClashError> {
        let text = serde_json::to_string(progress)?;
        self.blobs
            .borrow_mut()
            .insert(namespace.to_string(), text);
        Ok(())
    }
}
