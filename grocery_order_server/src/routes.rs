//! Request handler definitions
//!
//! Define each route and its handler here. Handlers that are more than a line or two MUST go into
//! a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers which block the current worker thread stall every request that worker owns, so any
//! non-cpu-bound operation (the mail relay call in particular) must be awaited, never blocked on.

use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use grocery_order_engine::{notify::OUT_OF_STOCK_MESSAGE, order_objects::Basket, traits::MailTransport, OrderFlowApi, OrderOutcome};
use log::*;

use crate::{
    auth::CallerIdentity,
    data_objects::{CostResponse, OrderParams},
    errors::ServerError,
};

pub const CALCULATIONS: &str = "/calculations";
pub const ORDERS: &str = "/orders";

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// -------------------------------------------   Calculations  -------------------------------------------------
/// Route handler for `GET /calculations`.
///
/// Prices the submitted basket and returns the total. Nothing is reserved, ordered or notified;
/// stock is not consulted. The basket is a JSON array of item names and the caller must identify
/// itself via the `USER_ID` header.
pub async fn calculations<M>(
    identity: CallerIdentity,
    basket: web::Json<Basket>,
    api: web::Data<OrderFlowApi<M>>,
) -> Result<HttpResponse, ServerError>
where
    M: MailTransport + 'static,
{
    trace!("💻️ Received calculations request from {}", identity.user_id);
    let priced = api.quote(&basket);
    Ok(HttpResponse::Ok().json(CostResponse::new(priced.total)))
}

// ----------------------------------------------   Orders  ----------------------------------------------------
/// Route handler for `POST /orders`.
///
/// Runs the full fulfilment workflow for the submitted basket and returns the customer-facing
/// text: either the order confirmation, or the fixed out-of-stock message when the basket cannot
/// be fulfilled (or the mail relay is unreachable — the engine folds that case in). The
/// destination address is passed as the `mailAddress` query parameter.
pub async fn place_order<M>(
    identity: CallerIdentity,
    params: web::Query<OrderParams>,
    basket: web::Json<Basket>,
    api: web::Data<OrderFlowApi<M>>,
) -> Result<HttpResponse, ServerError>
where
    M: MailTransport + 'static,
{
    trace!("💻️ Received order from {} for delivery to {}", identity.user_id, params.mail_address);
    let outcome = api.place_order(&identity.user_id, &basket, &params.mail_address).await;
    let message = match outcome {
        OrderOutcome::Confirmed { message, .. } => message,
        OrderOutcome::OutOfStock => OUT_OF_STOCK_MESSAGE.to_string(),
    };
    Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(message))
}
