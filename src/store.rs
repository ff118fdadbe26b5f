pub mod json;
pub mod memory;

use crate::prelude::AppError;
use serde_json::Value;
use std::fs;
use std::path::Path;

pub use json::JsonStore;
pub use memory::MemStore;

pub const DEFAULT_JSON_PATH: &str = "./.instance/contacts.json";

/// A local key-value slot store.
///
/// Reading a key that was never written yields `None`.
pub trait ContactStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<Value>, AppError>;

    fn set_item(&self, key: &str, value: Value) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Mem,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(format!(
                "'{}' is not a recognized storage medium (json, mem)",
                str
            ))),
        }
    }
}

pub fn parse_store(medium: StorageMediums, path: &str) -> Box<dyn ContactStore> {
    match medium {
        StorageMediums::Json => Box::new(JsonStore::new(path)),
        StorageMediums::Mem => Box::new(MemStore::new()),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
