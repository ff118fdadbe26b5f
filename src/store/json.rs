use super::*;

use serde_json::Map;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Keeps every slot in one JSON object on disk.
pub struct JsonStore {
    pub medium: String,
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    fn read_slots(&self) -> Result<Map<String, Value>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Map::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&data)? {
            Value::Object(slots) => Ok(slots),
            _ => Err(AppError::Validation(format!(
                "{} must hold a JSON object",
                self.path.display()
            ))),
        }
    }

    fn write_slots(&self, slots: &Map<String, Value>) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = serde_json::to_string(slots)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }
}

impl ContactStore for JsonStore {
    fn get_item(&self, key: &str) -> Result<Option<Value>, AppError> {
        let mut slots = self.read_slots()?;
        Ok(slots.remove(key))
    }

    fn set_item(&self, key: &str, value: Value) -> Result<(), AppError> {
        let mut slots = self.read_slots()?;
        slots.insert(key.to_string(), value);
        self.write_slots(&slots)
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
