//! # HTTP Server Module
//!
//! Axum server for the appointment service.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/appointments` - List appointments
//! - `/appointments/insert/{name_notari}/{sala}/{date_date}/{descripcio}` - Insert
//! - `/appointments/delete/{id}` - Delete by id

pub mod appointment_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use appointment_routes::{appointment_routes, AppointmentState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;
