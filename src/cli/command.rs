use clap::{Args, Parser, Subcommand};

use crate::domain::latency::DEFAULT_MAX_DELAY;
use crate::store::DEFAULT_JSON_PATH;

#[derive(Parser, Debug)]
#[command(name = "rolodex-store", version, about = "Local contact book")]
pub struct Cli {
    /// Storage choice (json, mem)
    #[arg(long, env = "CONTACTS_STORAGE", default_value_t = String::from("json"))]
    pub storage: String,

    /// Path of the JSON storage file
    #[arg(long, env = "CONTACTS_STORAGE_PATH", default_value_t = String::from(DEFAULT_JSON_PATH))]
    pub path: String,

    /// Upper bound of the simulated network delay, in milliseconds
    #[arg(long, env = "CONTACTS_MAX_LATENCY_MS", default_value_t = DEFAULT_MAX_DELAY.as_millis() as u64)]
    pub max_latency_ms: u64,

    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts sorted by last name
    List {
        /// Only list contacts whose first or last name matches
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Show a single contact
    Show {
        /// Contact id
        #[arg(long)]
        id: String,
    },

    /// Create a new contact, optionally filling in its fields
    Create {
        #[command(flatten)]
        fields: ContactFields,
    },

    /// Edit the fields of an existing contact
    /// Fields that are not given are left unchanged
    Edit {
        /// Contact id
        #[arg(long)]
        id: String,

        #[command(flatten)]
        fields: ContactFields,
    },

    /// Mark or unmark a contact as favorite
    Favorite {
        /// Contact id
        #[arg(long)]
        id: String,

        /// "true" to favorite, anything else to unfavorite
        #[arg(long, default_value = "true")]
        value: String,
    },

    /// Delete a contact
    Delete {
        /// Contact id
        #[arg(long)]
        id: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ContactFields {
    /// First name
    #[arg(long)]
    pub first: Option<String>,

    /// Last name
    #[arg(long)]
    pub last: Option<String>,

    /// Avatar image URL
    #[arg(long)]
    pub avatar: Option<String>,

    /// Twitter handle
    #[arg(long)]
    pub twitter: Option<String>,

    /// Free text notes
    #[arg(long)]
    pub notes: Option<String>,
}
