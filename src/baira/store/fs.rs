use super::ListStorage;
use crate::error::{BairaError, Result};
use crate::model::ListName;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

pub const DEFAULT_KEY_PREFIX: &str = "baira";

/// File-backed storage: one `<prefix>_<list>.json` document per list.
pub struct FileStore {
    root: PathBuf,
    key_prefix: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }

    pub fn with_key_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    pub fn key_prefix(&self) -> &str {
        &self.key_prefix
    }

    /// Path of the document holding `list`.
    pub fn list_path(&self, list: ListName) -> PathBuf {
        self.root
            .join(format!("{}.json", list.storage_key(&self.key_prefix)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BairaError::Io)?;
        }
        Ok(())
    }
}

impl ListStorage for FileStore {
    fn read(&self, list: ListName) -> Result<Option<String>> {
        match fs::read_to_string(self.list_path(list)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BairaError::Io(e)),
        }
    }

    fn write(&mut self, list: ListName, contents: &str) -> Result<()> {
        self.ensure_dir()?;

        let target = self.list_path(list);
        let tmp_path = self.root.join(format!(".{}-{}.tmp", list, Uuid::new_v4()));
        fs::write(&tmp_path, contents).map_err(BairaError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BairaError::Io(e));
        }

        Ok(())
    }

    fn remove(&mut self, list: ListName) -> Result<()> {
        match fs::remove_file(self.list_path(list)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BairaError::Io(e)),
        }
    }
}
