use web_sys::window;

use super::error::StoreError;
use super::record::SubmissionRecord;

/// Where the submission record lives between page loads.
pub trait SubmissionStore {
    fn load(&self) -> Result<Option<SubmissionRecord>, StoreError>;
    fn save(&self, record: &SubmissionRecord) -> Result<(), StoreError>;
}

/// Browser `localStorage`, one JSON value under `key`.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl SubmissionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<SubmissionRecord>, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(&self.key).map_err(|_| StoreError::Unavailable)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let raw = serde_json::to_string(record)?;
        storage.set_item(&self.key, &raw).map_err(|_| StoreError::Write)
    }
}

/// In-memory stand-in keeping the raw JSON, so tests see exactly what would be stored.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    pub raw: std::cell::RefCell<Option<String>>,
    pub writes: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_record(record: SubmissionRecord) -> Self {
        let store = Self::default();
        *store.raw.borrow_mut() = serde_json::to_string(&record).ok();
        store
    }

    pub fn with_raw(raw: &str) -> Self {
        let store = Self::default();
        *store.raw.borrow_mut() = Some(raw.to_string());
        store
    }

    pub fn stored(&self) -> Option<SubmissionRecord> {
        self.raw
            .borrow()
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

#[cfg(test)]
impl SubmissionStore for MemoryStore {
    fn load(&self) -> Result<Option<SubmissionRecord>, StoreError> {
        match self.raw.borrow().as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, record: &SubmissionRecord) -> Result<(), StoreError> {
        *self.raw.borrow_mut() = Some(serde_json::to_string(record)?);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
