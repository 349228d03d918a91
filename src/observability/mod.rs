//! Observability for the appointment service
//!
//! - Structured logging through `tracing` (text or JSON lines)
//! - Typed lifecycle events, logged under a stable `event` field
//!
//! # Usage
//!
//! ```ignore
//! use appointments::observability::{init_logging, Event, LogFormat};
//!
//! init_logging(LogFormat::Json);
//! tracing::info!(event = %Event::Serving, addr = "0.0.0.0:8000", "listening");
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{init_logging, LogFormat};
