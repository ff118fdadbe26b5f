use super::*;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Process-local store; contents vanish when it is dropped.
#[derive(Debug, Default)]
pub struct MemStore {
    data: Mutex<HashMap<String, Value>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ContactStore for MemStore {
    fn get_item(&self, key: &str) -> Result<Option<Value>, AppError> {
        let data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(data.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: Value) -> Result<(), AppError> {
        let mut data = self.data.lock().unwrap_or_else(PoisonError::into_inner);
        data.insert(key.to_string(), value);
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stores_and_overwrites_slots() -> Result<(), AppError> {
        let store = MemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_item("contacts")?, None);

        store.set_item("contacts", json!([]))?;
        store.set_item("contacts", json!([{"id": "z9y8x7w", "createdAt": 2}]))?;

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_item("contacts")?,
            Some(json!([{"id": "z9y8x7w", "createdAt": 2}]))
        );
        Ok(())
    }
}
