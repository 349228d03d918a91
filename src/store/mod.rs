//! Appointment record store
//!
//! The store holds the canonical persistent state of all appointments in a
//! single relational table, on PostgreSQL or SQLite. Handlers never touch
//! the pool directly: they open a [`Session`] for the duration of one
//! request and issue one statement at a time through it.
//!
//! # Guarantees
//!
//! - Identifiers are assigned by the table and never reused after deletion
//! - Every operation is a single statement (no batching, no retries)
//! - A session returns its connection on every exit path, panics included

mod errors;
mod record;
mod schema;
mod session;
mod url;

pub use errors::{StoreError, StoreResult};
pub use record::{Appointment, NewAppointment};
pub use session::{AppointmentStore, Session};
pub use url::{DatabaseUrl, Dialect};
