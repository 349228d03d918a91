//! Appointment record types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fields supplied by a client when creating an appointment.
///
/// All four values are raw text; the date is never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub name_notari: String,
    pub sala: String,
    pub date_date: String,
    pub descripcio: String,
}

impl NewAppointment {
    pub fn new(
        name_notari: impl Into<String>,
        sala: impl Into<String>,
        date_date: impl Into<String>,
        descripcio: impl Into<String>,
    ) -> Self {
        Self {
            name_notari: name_notari.into(),
            sala: sala.into(),
            date_date: date_date.into(),
            descripcio: descripcio.into(),
        }
    }

    /// Attach the identifier assigned by the store
    pub fn with_id(self, id: i64) -> Appointment {
        Appointment {
            id,
            name_notari: self.name_notari,
            sala: self.sala,
            date_date: self.date_date,
            descripcio: self.descripcio,
        }
    }
}

/// A persisted appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id: i64,
    pub name_notari: String,
    pub sala: String,
    pub date_date: String,
    pub descripcio: String,
}

impl Appointment {
    /// Column list matching the struct fields, for `query_as`
    pub(crate) const COLUMNS: &'static str = "id, name_notari, sala, date_date, descripcio";
}
