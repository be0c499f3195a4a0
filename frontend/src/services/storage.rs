//! Persisted "already submitted" marker.
//!
//! Stored in `localStorage` under [`SUBMISSION_GATE_KEY`] so it survives a
//! reload. When local storage is unavailable the marker only lives for the
//! current session.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Storage;

use crate::config::SUBMISSION_GATE_KEY;
use crate::{AppError, AppResult};

/// Read/write access to the submission gate flag.
pub trait GateStore {
    fn is_set(&self) -> bool;
    fn set(&self) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}

/// Session-only flag. Clones share the same value.
#[derive(Clone, Debug, Default)]
pub struct MemoryGate {
    flag: Rc<Cell<bool>>,
}

impl MemoryGate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GateStore for MemoryGate {
    fn is_set(&self) -> bool {
        self.flag.get()
    }

    fn set(&self) -> AppResult<()> {
        self.flag.set(true);
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.flag.set(false);
        Ok(())
    }
}

/// Flag kept in the browser's `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorageGate {
    storage: Option<Storage>,
    session: MemoryGate,
}

impl LocalStorageGate {
    /// Open the window's local storage, falling back to a session value.
    pub fn open() -> Self {
        let storage = gloo_utils::window().local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("⚠️ localStorage unavailable, submission gate lasts for this session only");
        }

        let session = MemoryGate::new();
        if let Some(storage) = &storage {
            if matches!(storage.get_item(SUBMISSION_GATE_KEY), Ok(Some(_))) {
                session.flag.set(true);
            }
        }

        Self { storage, session }
    }
}

impl GateStore for LocalStorageGate {
    fn is_set(&self) -> bool {
        match &self.storage {
            Some(storage) => match storage.get_item(SUBMISSION_GATE_KEY) {
                Ok(value) => value.is_some(),
                Err(_) => self.session.is_set(),
            },
            None => self.session.is_set(),
        }
    }

    fn set(&self) -> AppResult<()> {
        self.session.set()?;
        if let Some(storage) = &self.storage {
            storage
                .set_item(SUBMISSION_GATE_KEY, "true")
                .map_err(|e| AppError::Storage(format!("Failed to persist gate flag: {:?}", e)))?;
        }
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.session.clear()?;
        if let Some(storage) = &self.storage {
            storage
                .remove_item(SUBMISSION_GATE_KEY)
                .map_err(|e| AppError::Storage(format!("Failed to clear gate flag: {:?}", e)))?;
        }
        Ok(())
    }
}
