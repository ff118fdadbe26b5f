use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::helper;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub created_at: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite: Option<bool>,
}

/// Partial field set merged into an existing contact by an update.
///
/// `Some` overwrites the field, `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub first: Option<String>,
    pub last: Option<String>,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: Option<bool>,
}

impl Contact {
    /// A blank contact with a fresh id stamped with the current time.
    pub fn new() -> Self {
        Contact {
            id: helper::generate_id(),
            created_at: helper::now_millis(),
            first: None,
            last: None,
            avatar: None,
            twitter: None,
            notes: None,
            favorite: None,
        }
    }

    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(first) = patch.first {
            self.first = Some(first);
        }
        if let Some(last) = patch.last {
            self.last = Some(last);
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(twitter) = patch.twitter {
            self.twitter = Some(twitter);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(favorite) = patch.favorite {
            self.favorite = Some(favorite);
        }
    }

    pub fn is_favorite(&self) -> bool {
        self.favorite.unwrap_or(false)
    }

    /// "First Last", or `None` when both name fields are blank.
    pub fn display_name(&self) -> Option<String> {
        let name = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<&str>>()
            .join(" ");

        if name.is_empty() { None } else { Some(name) }
    }
}

impl ContactPatch {
    pub fn favorite(favorite: bool) -> Self {
        Self {
            favorite: Some(favorite),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Listing order: `last` ascending, then `created_at` ascending.
///
/// A missing `last` sorts before any present one.
pub fn compare_by_last_then_created(a: &Contact, b: &Contact) -> Ordering {
    a.last
        .cmp(&b.last)
        .then_with(|| a.created_at.cmp(&b.created_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(first: &str, last: Option<&str>, created_at: i64) -> Contact {
        Contact {
            first: Some(first.to_string()),
            last: last.map(str::to_string),
            created_at,
            ..Contact::new()
        }
    }

    #[test]
    fn patch_only_overwrites_present_fields() {
        let mut contact = named("Ada", Some("Lovelace"), 10);
        contact.notes = Some("math".to_string());

        contact.apply(ContactPatch {
            last: Some("Byron".to_string()),
            favorite: Some(true),
            ..ContactPatch::default()
        });

        assert_eq!(contact.first.as_deref(), Some("Ada"));
        assert_eq!(contact.last.as_deref(), Some("Byron"));
        assert_eq!(contact.notes.as_deref(), Some("math"));
        assert!(contact.is_favorite());
        assert_eq!(contact.created_at, 10);
    }

    #[test]
    fn display_name_skips_blank_parts() {
        let mut contact = Contact::new();
        assert_eq!(contact.display_name(), None);

        contact.last = Some("Hopper".to_string());
        assert_eq!(contact.display_name().as_deref(), Some("Hopper"));

        contact.first = Some("Grace".to_string());
        assert_eq!(contact.display_name().as_deref(), Some("Grace Hopper"));

        contact.first = Some("  ".to_string());
        assert_eq!(contact.display_name().as_deref(), Some("Hopper"));
    }

    #[test]
    fn serializes_with_camel_case_and_omits_missing_fields() -> Result<(), serde_json::Error> {
        let contact = Contact {
            id: "abc1234".to_string(),
            created_at: 1_700_000_000_000,
            first: Some("Ada".to_string()),
            ..Contact::new()
        };

        let json = serde_json::to_value(&contact)?;

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc1234",
                "createdAt": 1_700_000_000_000_i64,
                "first": "Ada"
            })
        );
        Ok(())
    }

    #[test]
    fn reads_records_with_unknown_keys() -> Result<(), serde_json::Error> {
        let contact: Contact = serde_json::from_str(
            r#"{"id":"q1w2e3r","createdAt":5,"last":"Lee","favorite":true,"color":"red"}"#,
        )?;

        assert_eq!(contact.id, "q1w2e3r");
        assert_eq!(contact.last.as_deref(), Some("Lee"));
        assert_eq!(contact.favorite, Some(true));
        assert_eq!(contact.first, None);
        Ok(())
    }

    #[test]
    fn orders_by_last_then_creation_time() {
        let mut contacts = vec![
            named("Cy", Some("Zed"), 1),
            named("Bo", None, 5),
            named("Al", Some("Ames"), 3),
            named("Di", None, 2),
            named("Ed", Some("Ames"), 2),
        ];

        contacts.sort_by(compare_by_last_then_created);

        let firsts: Vec<&str> = contacts
            .iter()
            .map(|c| c.first.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(firsts, vec!["Di", "Bo", "Ed", "Al", "Cy"]);
    }
}
