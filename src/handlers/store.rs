//! Store products and sales.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::handlers::now_rfc3339;
use crate::http::body::keep_null;
use crate::http::{AppState, Envelope, JsonBody};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub name: &'static str,
    pub price: f64,
    pub stock: u32,
    pub category: &'static str,
}

const PRODUCTS: [Product; 2] = [
    Product {
        id: 1,
        name: "Produto A",
        price: 99.90,
        stock: 15,
        category: "Eletrônicos",
    },
    Product {
        id: 2,
        name: "Produto B",
        price: 49.90,
        stock: 8,
        category: "Acessórios",
    },
];

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewSale {
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub total: Option<Value>,
    #[serde(
        rename = "paymentMethod",
        default,
        deserialize_with = "keep_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_method: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct RecordedSale {
    pub id: u64,
    #[serde(flatten)]
    pub fields: NewSale,
    pub date: String,
}

pub async fn products() -> Envelope<[Product; 2]> {
    Envelope::ok(PRODUCTS)
}

pub async fn create_sale(
    State(state): State<AppState>,
    JsonBody(sale): JsonBody<NewSale>,
) -> Envelope<RecordedSale> {
    Envelope::with_message(
        "Venda registrada com sucesso",
        RecordedSale {
            id: state.next_id(),
            fields: sale,
            date: now_rfc3339(),
        },
    )
}
