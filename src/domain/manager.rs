use super::*;

use crate::store::ContactStore;
use tracing::debug;

/// Storage key holding the serialized contact collection.
pub const CONTACTS_KEY: &str = "contacts";

/// Single authority for reading and mutating the persisted contacts.
///
/// Every operation reloads the whole collection from storage and writes the
/// whole collection back after a mutation; nothing is cached between calls.
pub struct ContactManager {
    storage: Box<dyn ContactStore>,
    latency: LatencySimulator,
}

impl ContactManager {
    pub fn new(storage: Box<dyn ContactStore>, latency: LatencySimulator) -> Self {
        Self { storage, latency }
    }

    pub fn latency(&self) -> &LatencySimulator {
        &self.latency
    }

    /// All contacts, optionally filtered by name, sorted by last name then
    /// creation time.
    pub async fn list(&self, query: Option<&str>) -> Result<Vec<Contact>, AppError> {
        let query = query.unwrap_or_default();
        self.latency.simulate(Some(&format!("list:{query}"))).await;

        let mut contacts = search::filter_contacts(self.load()?, query);
        contacts.sort_by(contact::compare_by_last_then_created);

        debug!(query, count = contacts.len(), "listed contacts");
        Ok(contacts)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Contact>, AppError> {
        self.latency.simulate(Some(&format!("get:{id}"))).await;

        let contact = self.load()?.into_iter().find(|c| c.id == id);

        debug!(id, found = contact.is_some(), "looked up contact");
        Ok(contact)
    }

    pub async fn create(&self) -> Result<Contact, AppError> {
        self.latency.simulate(None).await;

        let contact = Contact::new();
        let mut contacts = self.load()?;
        contacts.insert(0, contact.clone());
        self.save(&contacts)?;

        debug!(id = %contact.id, "created contact");
        Ok(contact)
    }

    pub async fn update(&self, id: &str, patch: ContactPatch) -> Result<Contact, AppError> {
        self.latency.simulate(None).await;

        let mut contacts = self.load()?;
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        contact.apply(patch);
        let updated = contact.clone();
        self.save(&contacts)?;

        debug!(id, "updated contact");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut contacts = self.load()?;

        let Some(index) = contacts.iter().position(|c| c.id == id) else {
            debug!(id, "nothing to delete");
            return Ok(false);
        };

        contacts.remove(index);
        self.save(&contacts)?;

        debug!(id, "deleted contact");
        Ok(true)
    }

    fn load(&self) -> Result<Vec<Contact>, AppError> {
        match self.storage.get_item(CONTACTS_KEY)? {
            Some(value) if !value.is_null() => Ok(serde_json::from_value(value)?),
            _ => Ok(Vec::new()),
        }
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        self.storage
            .set_item(CONTACTS_KEY, serde_json::to_value(contacts)?)
    }
}
