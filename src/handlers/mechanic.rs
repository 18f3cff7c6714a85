//! Mechanic work orders.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::body::keep_null;
use crate::http::{AppState, Envelope, JsonBody};

/// Status given to every newly opened work order.
pub const OPEN_STATUS: &str = "Aberta";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkOrder {
    pub id: u64,
    pub vehicle: &'static str,
    pub plate: &'static str,
    pub service: &'static str,
    pub status: &'static str,
}

const WORK_ORDERS: [WorkOrder; 2] = [
    WorkOrder {
        id: 1,
        vehicle: "Fiat Uno",
        plate: "ABC-1234",
        service: "Troca de óleo",
        status: "Em andamento",
    },
    WorkOrder {
        id: 2,
        vehicle: "VW Gol",
        plate: "XYZ-9876",
        service: "Revisão",
        status: "Aguardando peças",
    },
];

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewWorkOrder {
    #[serde(
        rename = "vehicleId",
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub vehicle_id: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub services: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct OpenedWorkOrder {
    pub id: u64,
    #[serde(flatten)]
    pub fields: NewWorkOrder,
    pub status: &'static str,
}

pub async fn list() -> Envelope<[WorkOrder; 2]> {
    Envelope::ok(WORK_ORDERS)
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(order): JsonBody<NewWorkOrder>,
) -> Envelope<OpenedWorkOrder> {
    Envelope::with_message(
        "Ordem de serviço criada",
        OpenedWorkOrder {
            id: state.next_id(),
            fields: order,
            status: OPEN_STATUS,
        },
    )
}
