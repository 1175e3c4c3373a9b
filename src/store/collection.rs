//! Whole-collection load and save on top of a [`Storage`] backend.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::backend::Storage;
use crate::error::Result;

/// Storage key for each persisted collection.
pub mod keys {
    pub const DEPARTMENTS: &str = "departments";
    pub const REPORTS: &str = "reports";
    pub const LEAVE_REQUESTS: &str = "leaveRequests";
    pub const HOLIDAYS: &str = "holidays";
    pub const ATTENDANCE: &str = "attendance";
}

/// Load a collection, `None` when the key was never written.
///
/// A blob that is not a valid list of `T` loads as an empty list.
pub fn load<T, S>(storage: &S, key: &str) -> Result<Option<Vec<T>>>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
{
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => Ok(Some(items)),
        Err(e) => {
            tracing::warn!("Discarding malformed '{}' data: {}", key, e);
            Ok(Some(Vec::new()))
        }
    }
}

/// Load a collection, falling back to `seed` when the key is absent.
pub fn load_or<T, S, F>(storage: &S, key: &str, seed: F) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    S: Storage + ?Sized,
    F: FnOnce() -> Vec<T>,
{
    Ok(load(storage, key)?.unwrap_or_else(seed))
}

/// Overwrite a collection with its full contents.
pub fn save<T, S>(storage: &S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: Storage + ?Sized,
{
    let json = serde_json::to_string(items)?;
    storage.set(key, &json)?;
    tracing::debug!("Saved {} {} record(s)", items.len(), key);
    Ok(())
}
