pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::actions::FormData;
use crate::domain::contact::{Contact, ContactPatch};
use crate::errors::AppError;
use command::ContactFields;
use url::Url;

pub const NO_NAME: &str = "No Name";

pub fn favorite_marker(contact: &Contact) -> &'static str {
    if contact.is_favorite() { "★" } else { "☆" }
}

pub fn listing_row(position: usize, contact: &Contact) -> String {
    let name = contact
        .display_name()
        .unwrap_or_else(|| NO_NAME.to_string());

    format!(
        "{position:>3}. {:<9} {:<30} {}",
        contact.id,
        name,
        favorite_marker(contact)
    )
}

pub fn display_contact(contact: &Contact) -> String {
    let name = contact
        .display_name()
        .unwrap_or_else(|| NO_NAME.to_string());

    let mut output = format!(
        "Id: {}\n\
        Name: {} {}",
        contact.id,
        name,
        favorite_marker(contact)
    );

    if let Some(avatar) = contact.avatar.as_deref().filter(|a| !a.is_empty()) {
        output.push_str(&format!("\nAvatar: {avatar}"));
    }
    if let Some(twitter) = contact.twitter.as_deref().filter(|t| !t.is_empty()) {
        output.push_str(&format!("\nTwitter: https://twitter.com/{twitter}"));
    }
    if let Some(notes) = contact.notes.as_deref().filter(|n| !n.is_empty()) {
        output.push_str(&format!("\nNotes: {notes}"));
    }

    output
}

/// Submits the given field flags as an edit form, rejecting avatars that are
/// not URLs.
///
/// An empty avatar clears the field and is accepted.
pub fn form_from_fields(fields: ContactFields) -> Result<FormData, AppError> {
    if let Some(avatar) = fields.avatar.as_deref()
        && !avatar.is_empty()
    {
        Url::parse(avatar)?;
    }

    let ContactFields {
        first,
        last,
        avatar,
        twitter,
        notes,
    } = fields;

    Ok([
        ("first", first),
        ("last", last),
        ("avatar", avatar),
        ("twitter", twitter),
        ("notes", notes),
    ]
    .into_iter()
    .filter_map(|(name, value)| Some((name, value?)))
    .collect())
}

pub fn patch_from_fields(fields: ContactFields) -> Result<ContactPatch, AppError> {
    Ok(ContactPatch::from_form(&form_from_fields(fields)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grace() -> Contact {
        Contact {
            id: "g7h8i9j".to_string(),
            first: Some("Grace".to_string()),
            last: Some("Hopper".to_string()),
            twitter: Some("grace".to_string()),
            favorite: Some(true),
            ..Contact::new()
        }
    }

    #[test]
    fn listing_row_shows_name_and_star() {
        let row = listing_row(1, &grace());

        assert!(row.starts_with("  1. g7h8i9j"));
        assert!(row.contains("Grace Hopper"));
        assert!(row.ends_with('★'));

        let blank = Contact::new();
        let row = listing_row(2, &blank);
        assert!(row.contains(NO_NAME));
        assert!(row.ends_with('☆'));
    }

    #[test]
    fn display_contact_skips_empty_fields() {
        let output = display_contact(&grace());

        assert!(output.contains("Name: Grace Hopper ★"));
        assert!(output.contains("Twitter: https://twitter.com/grace"));
        assert!(!output.contains("Notes:"));
        assert!(!output.contains("Avatar:"));
    }

    #[test]
    fn avatar_must_be_a_url() {
        let fields = ContactFields {
            avatar: Some("not a url".to_string()),
            ..ContactFields::default()
        };
        assert!(matches!(patch_from_fields(fields), Err(AppError::Url(_))));

        let fields = ContactFields {
            avatar: Some("https://example.com/ada.png".to_string()),
            first: Some("Ada".to_string()),
            ..ContactFields::default()
        };
        let patch = patch_from_fields(fields).unwrap();
        assert_eq!(patch.first.as_deref(), Some("Ada"));
        assert_eq!(patch.favorite, None);

        let cleared = ContactFields {
            avatar: Some(String::new()),
            ..ContactFields::default()
        };
        assert!(patch_from_fields(cleared).is_ok());
    }

    #[test]
    fn form_from_fields_only_submits_given_flags() {
        let fields = ContactFields {
            first: Some("Grace".to_string()),
            notes: Some(String::new()),
            ..ContactFields::default()
        };

        let form = form_from_fields(fields).unwrap();

        assert_eq!(form.get("first"), Some("Grace"));
        assert_eq!(form.get("notes"), Some(""));
        assert_eq!(form.get("last"), None);
        assert_eq!(form.get("favorite"), None);
        assert!(form_from_fields(ContactFields::default()).unwrap().is_empty());
    }
}
