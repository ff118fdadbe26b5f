//! Loader and action helpers for a front end driving the contact store.
//!
//! These mirror the route contract of a list/detail contact app: the root
//! view lists contacts for a search query and creates new ones, the detail
//! view loads one contact (absence is an error there), and the favorite, edit
//! and destroy forms submit into the store.

use super::*;

use super::manager::ContactManager;
use tracing::info;

/// Submitted form fields, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl ContactPatch {
    /// Builds a patch from the fields present in `form`.
    ///
    /// `favorite` is only true for the literal value `"true"`.
    pub fn from_form(form: &FormData) -> Self {
        let text = |name: &str| form.get(name).map(str::to_string);

        Self {
            first: text("first"),
            last: text("last"),
            avatar: text("avatar"),
            twitter: text("twitter"),
            notes: text("notes"),
            favorite: form.get("favorite").map(|value| value == "true"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootView {
    pub contacts: Vec<Contact>,
    pub query: Option<String>,
}

pub fn contact_path(id: &str) -> String {
    format!("/contacts/{id}")
}

pub fn edit_path(id: &str) -> String {
    format!("/contacts/{id}/edit")
}

pub async fn root_loader(
    manager: &ContactManager,
    query: Option<&str>,
) -> Result<RootView, AppError> {
    let query = query.filter(|q| !q.is_empty());
    let contacts = manager.list(query).await?;

    Ok(RootView {
        contacts,
        query: query.map(str::to_string),
    })
}

/// Creates a blank contact and returns it with the path of its edit view.
pub async fn root_action(manager: &ContactManager) -> Result<(Contact, String), AppError> {
    let contact = manager.create().await?;
    let redirect = edit_path(&contact.id);

    info!(id = %contact.id, "new contact ready for editing");
    Ok((contact, redirect))
}

pub async fn contact_loader(manager: &ContactManager, id: &str) -> Result<Contact, AppError> {
    manager
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))
}

pub async fn favorite_action(
    manager: &ContactManager,
    id: &str,
    form: &FormData,
) -> Result<Contact, AppError> {
    let favorite = form.get("favorite") == Some("true");
    manager.update(id, ContactPatch::favorite(favorite)).await
}

/// Merges the edit form into the contact and returns its detail path.
pub async fn edit_action(
    manager: &ContactManager,
    id: &str,
    form: &FormData,
) -> Result<String, AppError> {
    let contact = manager.update(id, ContactPatch::from_form(form)).await?;
    Ok(contact_path(&contact.id))
}

pub async fn destroy_action(manager: &ContactManager, id: &str) -> Result<bool, AppError> {
    let removed = manager.delete(id).await?;
    if removed {
        info!(id, "contact destroyed");
    }
    Ok(removed)
}
