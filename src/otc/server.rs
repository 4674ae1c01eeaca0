//! HTTP front end for OTC trading
//!
//! Routes:
//! - `GET /offers` lists the local offer book
//! - `GET /orders` proxies the node's open OTC orders
//! - `POST /take/buy` takes an order and drops the matching offer
//! - `POST /take/create` opens an order and lists it as an offer

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use super::{Offer, OfferBook};
use crate::api::NodeClient;
use crate::model::{Address, ExchangeOrder};
use crate::rpc::{ErrorKind, SdkError};

pub struct OtcState {
    pub client: NodeClient,
    pub offers: OfferBook,
}

#[derive(Debug, Error)]
pub enum OtcError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Node(#[from] SdkError),
}

impl IntoResponse for OtcError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match &self {
            OtcError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone())
            }
            OtcError::Node(e) => {
                let status = match e.kind() {
                    ErrorKind::ApiError => StatusCode::UNPROCESSABLE_ENTITY,
                    _ => StatusCode::BAD_GATEWAY,
                };
                (status, e.kind().as_str(), e.message())
            }
        };
        (status, Json(json!({ "error": kind, "message": message }))).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct TakeForm {
    pub address: String,
    pub uid: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateForm {
    pub address: String,
    pub sell_symbol: String,
    pub sell_amount: String,
    pub buy_symbol: String,
    pub buy_amount: String,
}

pub fn router(state: Arc<OtcState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/offers", get(list_offers))
        .route("/orders", get(list_orders))
        .route("/take/buy", post(take_buy))
        .route("/take/create", post(take_create))
        .layer(cors)
        .with_state(state)
}

/// Bind `addr` and serve until the listener fails
pub async fn run_server(state: Arc<OtcState>, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, node = %state.client.url(), "OTC server listening");
    axum::serve(listener, router(state)).await
}

async fn list_offers(State(state): State<Arc<OtcState>>) -> Json<Vec<Offer>> {
    Json(state.offers.list().await)
}

async fn list_orders(
    State(state): State<Arc<OtcState>>,
) -> Result<Json<Vec<ExchangeOrder>>, OtcError> {
    Ok(Json(state.client.get_otc().await?))
}

async fn take_buy(
    State(state): State<Arc<OtcState>>,
    Form(form): Form<TakeForm>,
) -> Result<Json<serde_json::Value>, OtcError> {
    let buyer = parse_address(&form.address)?;
    let uid = parse_amount("uid", &form.uid)?;

    let reply = state
        .client
        .take_order(&buyer, &uid)
        .await
        .inspect_err(|e| warn!(uid = %uid, error = %e, "takeOrder failed"))?;

    if state.offers.remove(&uid.to_string()).await.is_some() {
        info!(uid = %uid, buyer = %buyer, "offer taken");
    }
    Ok(Json(json!({ "result": reply })))
}

async fn take_create(
    State(state): State<Arc<OtcState>>,
    Form(form): Form<CreateForm>,
) -> Result<Json<Offer>, OtcError> {
    let seller = parse_address(&form.address)?;
    let amount = parse_amount("sellAmount", &form.sell_amount)?;
    let price = parse_amount("buyAmount", &form.buy_amount)?;
    if form.sell_symbol.is_empty() || form.buy_symbol.is_empty() {
        return Err(OtcError::BadRequest("token symbols are required".into()));
    }

    let uid = state
        .client
        .create_otc_order(
            &seller,
            &seller,
            &form.sell_symbol,
            &form.buy_symbol,
            &amount,
            &price,
        )
        .await?;

    let offer = Offer {
        id: uid,
        seller,
        sell_symbol: form.sell_symbol,
        sell_amount: amount.to_string(),
        buy_symbol: form.buy_symbol,
        buy_amount: price.to_string(),
    };
    info!(id = %offer.id, seller = %offer.seller, "offer created");
    state.offers.insert(offer.clone()).await;
    Ok(Json(offer))
}

fn parse_address(text: &str) -> Result<Address, OtcError> {
    Address::from_str(text).map_err(|e| OtcError::BadRequest(format!("address: {e}")))
}

fn parse_amount(field: &str, text: &str) -> Result<BigInt, OtcError> {
    BigInt::from_str(text.trim())
        .ok()
        .filter(|n| n.sign() != num_bigint::Sign::Minus)
        .ok_or_else(|| {
            OtcError::BadRequest(format!("{field}: `{text}` is not a non-negative integer"))
        })
}
