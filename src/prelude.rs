pub use crate::cli::{command, run_app};
pub use crate::domain::{
    actions::{self, FormData, RootView},
    contact::{self, Contact, ContactPatch},
    latency::LatencySimulator,
    manager::{CONTACTS_KEY, ContactManager},
    search::filter_contacts,
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, JsonStore, MemStore, StorageMediums, parse_store};
