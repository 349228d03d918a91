//! Appointment HTTP Routes
//!
//! Insert and delete are exposed as GET routes so existing clients that
//! build plain links keep working. They are not idempotent and must not be
//! cached.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::observability::Event;
use crate::store::{Appointment, AppointmentStore, NewAppointment};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Appointment state shared across handlers
pub struct AppointmentState {
    pub store: AppointmentStore,
}

impl AppointmentState {
    pub fn new(store: AppointmentStore) -> Self {
        Self { store }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Appointment Routes
// ==================

/// Create appointment routes
pub fn appointment_routes(state: Arc<AppointmentState>) -> Router {
    Router::new()
        .route("/appointments", get(list_handler))
        .route("/appointments/", get(list_handler))
        .route(
            "/appointments/insert/:name_notari/:sala/:date_date/:descripcio",
            get(insert_handler),
        )
        .route("/appointments/delete/:id", get(delete_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List every stored appointment
async fn list_handler(
    State(state): State<Arc<AppointmentState>>,
) -> ApiResult<Json<Vec<Appointment>>> {
    let mut session = state.store.session().await?;
    Ok(Json(session.list_all().await?))
}

/// Insert an appointment built from the four path segments
async fn insert_handler(
    State(state): State<Arc<AppointmentState>>,
    Path((name_notari, sala, date_date, descripcio)): Path<(String, String, String, String)>,
) -> ApiResult<Json<Appointment>> {
    let fields = NewAppointment::new(name_notari, sala, date_date, descripcio);
    let mut session = state.store.session().await?;
    let appointment = session.insert(fields).await?;

    debug!(event = %Event::AppointmentInserted, id = appointment.id, "appointment inserted");
    Ok(Json(appointment))
}

/// Delete an appointment by id, or 404 if it does not exist
async fn delete_handler(
    State(state): State<Arc<AppointmentState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let mut session = state.store.session().await?;
    if session.find_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }
    session.delete(id).await?;

    debug!(event = %Event::AppointmentDeleted, id, "appointment deleted");
    Ok(Json(MessageResponse {
        message: format!("Appointment {} deleted.", id),
    }))
}
