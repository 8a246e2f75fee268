//! Session token persistence.

use web_sys::Storage;

use crate::config::TOKEN_STORAGE_KEY;
use crate::types::{AppError, AppResult};

fn local_storage() -> AppResult<Storage> {
    gloo_utils::window()
        .local_storage()
        .map_err(|e| AppError::Storage(format!("{:?}", e)))?
        .ok_or_else(|| AppError::Storage("localStorage is not available".into()))
}

/// Token saved by the last login, if any.
pub fn load_token() -> Option<String> {
    match local_storage() {
        Ok(storage) => storage.get_item(TOKEN_STORAGE_KEY).ok().flatten(),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    }
}

pub fn store_token(token: &str) -> AppResult<()> {
    local_storage()?
        .set_item(TOKEN_STORAGE_KEY, token)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}

pub fn clear_token() -> AppResult<()> {
    local_storage()?
        .remove_item(TOKEN_STORAGE_KEY)
        .map_err(|e| AppError::Storage(format!("{:?}", e)))
}
