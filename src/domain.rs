pub mod actions;
pub mod contact;
pub mod latency;
pub mod manager;
pub mod search;

use crate::errors::AppError;
use contact::{Contact, ContactPatch};
use latency::LatencySimulator;
