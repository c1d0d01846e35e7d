use crate::error::{NoticeError, Result};
use crate::storage::KeyValueStore;
use crate::ui;
use fs2::FileExt;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

type StoreMap = BTreeMap<String, String>;

/// JSON map on disk. Writes go through a temp file and rename, under an
/// exclusive advisory lock on a sibling `.lock` file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> Result<&Path> {
        self.path.parent().ok_or_else(|| {
            NoticeError::PathError(format!(
                "Invalid store path (no parent directory): {}",
                self.path.display()
            ))
        })
    }

    fn read_map(&self) -> Result<StoreMap> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreMap::new()),
            Err(e) => {
                return Err(NoticeError::IoError {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        if raw.trim().is_empty() {
            return Ok(StoreMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            NoticeError::StorageError(format!("{} is corrupted: {}", self.path.display(), e))
        })
    }

    fn lock(&self) -> Result<File> {
        let dir = self.dir()?;
        fs::create_dir_all(dir).map_err(|e| NoticeError::IoError {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let lock_path = self.path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| NoticeError::IoError {
                path: lock_path.clone(),
                source: e,
            })?;
        file.lock_exclusive()
            .map_err(|e| NoticeError::LockError(format!("{}: {}", lock_path.display(), e)))?;
        Ok(file)
    }

    fn update(&self, apply: impl FnOnce(&mut StoreMap)) -> Result<()> {
        let lock = self.lock()?;

        // A corrupted store is replaced rather than blocking every write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(NoticeError::StorageError(msg)) => {
                ui::warning(&format!("Resetting store: {}", msg));
                StoreMap::new()
            }
            Err(e) => return Err(e),
        };
        apply(&mut map);
        self.write_atomically(&map)?;

        let _ = FileExt::unlock(&lock);
        Ok(())
    }

    fn write_atomically(&self, map: &StoreMap) -> Result<()> {
        let content = serde_json::to_string_pretty(map)?;
        let tmp_path = self.path.with_extension("tmp");

        let mut tmp_file = File::create(&tmp_path).map_err(|e| NoticeError::IoError {
            path: tmp_path.clone(),
            source: e,
        })?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| NoticeError::IoError {
            path: self.path.clone(),
            source: e,
        })?;
        ui::verbose(&format!("store written: {}", self.path.display()));
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|map| {
            map.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|map| {
            map.remove(key);
        })
    }
}
