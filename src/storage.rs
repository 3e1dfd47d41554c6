use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PageError;

/// Durable key-value storage scoped to the origin.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError>;
}

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage(&self) -> Result<web_sys::Storage, PageError> {
        web_sys::window()
            .ok_or(PageError::MissingElement("window"))?
            .local_storage()
            .map_err(|e| PageError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| PageError::Storage("localStorage disabled".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| PageError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| PageError::Storage(format!("{:?}", e)))
    }
}

/// In-memory store, survives "reloads" as long as the value is kept around.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, PageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryStore::default();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "a").unwrap();
        store.set_item("k", "true").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("true"));
    }
}
