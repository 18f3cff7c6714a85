//! Dental appointments.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::handlers::Created;
use crate::http::body::keep_null;
use crate::http::{AppState, Envelope, JsonBody};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Appointment {
    pub id: u64,
    pub patient: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub procedure: &'static str,
}

const APPOINTMENTS: [Appointment; 2] = [
    Appointment {
        id: 1,
        patient: "João Silva",
        date: "2025-11-26",
        time: "14:00",
        procedure: "Limpeza",
    },
    Appointment {
        id: 2,
        patient: "Maria Santos",
        date: "2025-11-26",
        time: "15:30",
        procedure: "Canal",
    },
];

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewAppointment {
    #[serde(
        rename = "patientId",
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub patient_id: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub time: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub procedure: Option<Value>,
}

pub async fn list() -> Envelope<[Appointment; 2]> {
    Envelope::ok(APPOINTMENTS)
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(appointment): JsonBody<NewAppointment>,
) -> Envelope<Created<NewAppointment>> {
    Envelope::with_message(
        "Consulta agendada com sucesso",
        Created::new(state.next_id(), appointment),
    )
}
