//! Observable events
//!
//! Events are explicit and typed. Each one renders to a fixed upper-case
//! name so log consumers can match on it.

use std::fmt;

/// Observable events in the appointment service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Appointment table present
    SchemaReady,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Records
    /// Row inserted
    AppointmentInserted,
    /// Row removed
    AppointmentDeleted,
    /// Delete requested for an absent id
    AppointmentNotFound,

    // Failures
    /// Statement or connection failure surfaced as a 500
    StoreFailure,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "APPOINTMENTS_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::SchemaReady => "SCHEMA_READY",
            Event::Serving => "APPOINTMENTS_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::AppointmentInserted => "APPOINTMENT_INSERTED",
            Event::AppointmentDeleted => "APPOINTMENT_DELETED",
            Event::AppointmentNotFound => "APPOINTMENT_NOT_FOUND",
            Event::StoreFailure => "STORE_FAILURE",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::Serving.to_string(), "APPOINTMENTS_SERVING");
        assert_eq!(Event::AppointmentNotFound.as_str(), "APPOINTMENT_NOT_FOUND");
    }
}
