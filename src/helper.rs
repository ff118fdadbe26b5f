use chrono::Utc;
use uuid::Uuid;

/// Length of a generated contact id.
pub const ID_LENGTH: usize = 7;

/// Generates a short opaque id for a new contact.
///
/// Ids are the first `ID_LENGTH` characters of a random v4 uuid. Uniqueness
/// is not checked against existing contacts.
pub fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LENGTH);
    id
}

/// Current time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
