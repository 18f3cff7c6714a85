//! Client records.

use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::handlers::Created;
use crate::http::body::keep_null;
use crate::http::{AppState, Envelope, JsonBody};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientSummary {
    pub id: u64,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

const CLIENTS: [ClientSummary; 2] = [
    ClientSummary {
        id: 1,
        name: "João Silva",
        email: "joao@email.com",
        phone: "11999999999",
    },
    ClientSummary {
        id: 2,
        name: "Maria Santos",
        email: "maria@email.com",
        phone: "11988888888",
    },
];

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewClient {
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub cpf: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ClientDetail {
    pub id: String,
    pub name: &'static str,
    pub email: &'static str,
}

pub async fn list() -> Envelope<[ClientSummary; 2]> {
    Envelope::ok(CLIENTS)
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(client): JsonBody<NewClient>,
) -> Envelope<Created<NewClient>> {
    Envelope::with_message(
        "Cliente cadastrado com sucesso",
        Created::new(state.next_id(), client),
    )
}

pub async fn get(Path(id): Path<String>) -> Envelope<ClientDetail> {
    Envelope::ok(ClientDetail {
        id,
        name: "João Silva",
        email: "joao@email.com",
    })
}

/// `{id, ...updates}`: keys in the body, `id` included, win over the path id.
pub async fn update(
    Path(id): Path<String>,
    JsonBody(updates): JsonBody<Map<String, Value>>,
) -> Envelope<Map<String, Value>> {
    let mut data = Map::new();
    data.insert("id".to_string(), Value::String(id));
    data.extend(updates);

    Envelope::with_message("Cliente atualizado com sucesso", data)
}

pub async fn delete(Path(id): Path<String>) -> Envelope {
    tracing::debug!(client_id = %id, "Client delete requested");
    Envelope::message("Cliente removido com sucesso")
}

#[cfg(test)]
mod tests {
    use crate::http::testing::{send, test_app, FIRST_ID};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_is_fixed() {
        let app = test_app();
        let (status, first) = send(&app, Method::GET, "/api/clients", None).await;
        let (_, second) = send(&app, Method::GET, "/api/clients", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(
            first["data"],
            json!([
                {"id": 1, "name": "João Silva", "email": "joao@email.com", "phone": "11999999999"},
                {"id": 2, "name": "Maria Santos", "email": "maria@email.com", "phone": "11988888888"}
            ])
        );
    }

    #[tokio::test]
    async fn test_create_echoes_with_id() {
        let app = test_app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/clients",
            Some(json!({"name": "Ana", "email": "ana@x.com", "phone": "1", "cpf": "123", "id": 9})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": "Cliente cadastrado com sucesso",
                "data": {"id": FIRST_ID, "name": "Ana", "email": "ana@x.com", "phone": "1", "cpf": "123"}
            })
        );
    }

    #[tokio::test]
    async fn test_create_omits_missing_fields() {
        let app = test_app();
        let (status, body) = send(&app, Method::POST, "/api/clients", Some(json!({"name": "Só nome"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({"id": FIRST_ID, "name": "Só nome"}));
    }

    #[tokio::test]
    async fn test_get_substitutes_id() {
        let app = test_app();
        let (_, body) = send(&app, Method::GET, "/api/clients/abc", None).await;
        assert_eq!(
            body,
            json!({"success": true, "data": {"id": "abc", "name": "João Silva", "email": "joao@email.com"}})
        );
    }

    #[tokio::test]
    async fn test_update_merges_body() {
        let app = test_app();
        let (status, body) = send(&app, Method::PUT, "/api/clients/7", Some(json!({"name": "X"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], json!("Cliente atualizado com sucesso"));
        assert_eq!(body["data"], json!({"id": "7", "name": "X"}));
    }

    #[tokio::test]
    async fn test_update_body_id_wins() {
        let app = test_app();
        let (_, body) = send(&app, Method::PUT, "/api/clients/7", Some(json!({"id": 99}))).await;
        assert_eq!(body["data"], json!({"id": 99}));
    }

    #[tokio::test]
    async fn test_update_array_body_spreads_indices() {
        let app = test_app();
        let (status, body) = send(&app, Method::PUT, "/api/clients/7", Some(json!(["a", "b"]))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({"id": "7", "0": "a", "1": "b"}));
    }

    #[tokio::test]
    async fn test_delete_confirms() {
        let app = test_app();
        let (status, body) = send(&app, Method::DELETE, "/api/clients/3", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "message": "Cliente removido com sucesso"}));
    }
}
