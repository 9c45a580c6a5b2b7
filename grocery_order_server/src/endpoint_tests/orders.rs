use std::sync::Arc;

use actix_web::{http::StatusCode, web, web::ServiceConfig};
use grocery_order_engine::{
    catalog::Catalog,
    events::OrderPlacedProducer,
    offers::OfferBook,
    traits::{MailTransportError, OrderStreamError},
    OrderFlowApi,
};

use super::{
    helpers::{calculations_request, order_request, send_request},
    mocks::{MockMailClient, MockStreamProducer},
};
use crate::{
    integrations::create_order_stream_subscription,
    routes::{calculations, place_order as place_order_route, CALCULATIONS, ORDERS},
};

const USER: &str = "USER_ID";
const MAIL_ADDRESS: &str = "my.address@gmail.com";
const BASKET_WITH_OFFERS: &str = r#"["orange", "apple", "apple", "orange", "orange", "cucumber"]"#;
const CONFIRMATION: &str = "Dear USER_ID! You placed order that contains [{orange=3, apple=2}] and costs $1.1. We \
                            sent you details to my.address@gmail.com";
const OUT_OF_STOCK: &str = "These goods are out of stock. Please place another order.";

#[actix_web::test]
async fn normal_calculations() {
    let _ = env_logger::try_init().ok();
    let req = calculations_request(Some(USER), Some(r#"["orange", "apple", "apple", "apple"]"#));
    let (status, body) = send_request(req, configure_with(MockMailClient::new(), OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"totalCost":"$1.45"}"#);
}

#[actix_web::test]
async fn calculations_with_offers() {
    let _ = env_logger::try_init().ok();
    let req = calculations_request(Some(USER), Some(r#"["orange", "apple", "apple", "orange", "orange"]"#));
    let (status, body) = send_request(req, configure_with(MockMailClient::new(), OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"totalCost":"$1.1"}"#);
}

#[actix_web::test]
async fn calculations_with_unknown_items() {
    let _ = env_logger::try_init().ok();
    let req = calculations_request(Some(USER), Some(BASKET_WITH_OFFERS));
    let (status, body) = send_request(req, configure_with(MockMailClient::new(), OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"totalCost":"$1.1"}"#);
}

#[actix_web::test]
async fn calculations_with_empty_basket() {
    let _ = env_logger::try_init().ok();
    let req = calculations_request(Some(USER), Some("[]"));
    let (status, body) = send_request(req, configure_with(MockMailClient::new(), OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"totalCost":"$0.0"}"#);
}

#[actix_web::test]
async fn calculations_without_user_id() {
    let _ = env_logger::try_init().ok();
    let req = calculations_request(None, Some("[]"));
    let (status, _body) = send_request(req, configure_with(MockMailClient::new(), OrderPlacedProducer::default())).await;
    assert!(status.is_client_error());
}

#[actix_web::test]
async fn calculations_without_body() {
    let _ = env_logger::try_init().ok();
    let req = calculations_request(Some(USER), None);
    let (status, _body) = send_request(req, configure_with(MockMailClient::new(), OrderPlacedProducer::default())).await;
    assert!(status.is_client_error());
}

#[actix_web::test]
async fn place_order() {
    let _ = env_logger::try_init().ok();
    let mut mailer = MockMailClient::new();
    mailer
        .expect_send_message()
        .withf(|name, addr, _, _, _| name == USER && addr == MAIL_ADDRESS)
        .times(1)
        .returning(|_, _, _, _, _| Ok("Email sent successfully".to_string()));
    let req = order_request(USER, MAIL_ADDRESS, BASKET_WITH_OFFERS);
    let (status, body) = send_request(req, configure_with(mailer, OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, CONFIRMATION);
}

#[actix_web::test]
async fn place_order_with_soft_mail_failure() {
    let _ = env_logger::try_init().ok();
    let mut mailer = MockMailClient::new();
    mailer.expect_send_message().times(1).returning(|_, _, _, _, _| Ok("Email wasn't sent".to_string()));
    let req = order_request(USER, MAIL_ADDRESS, BASKET_WITH_OFFERS);
    let (status, body) = send_request(req, configure_with(mailer, OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    // There is no distinct failure text; a soft failure reads exactly like success.
    assert_eq!(body, CONFIRMATION);
}

#[actix_web::test]
async fn place_order_when_mail_relay_is_down() {
    let _ = env_logger::try_init().ok();
    let mut mailer = MockMailClient::new();
    mailer
        .expect_send_message()
        .times(1)
        .returning(|_, _, _, _, _| Err(MailTransportError::Unreachable("connection refused".to_string())));
    let req = order_request(USER, MAIL_ADDRESS, BASKET_WITH_OFFERS);
    let (status, body) = send_request(req, configure_with(mailer, OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, OUT_OF_STOCK);
}

#[actix_web::test]
async fn place_order_with_out_of_stock_basket() {
    let _ = env_logger::try_init().ok();
    let mut mailer = MockMailClient::new();
    mailer.expect_send_message().never();
    let basket = r#"["orange", "apple", "apple", "orange", "orange", "cucumber", "apple", "apple", "apple",
                     "apple", "apple", "apple", "apple", "apple"]"#;
    let req = order_request(USER, MAIL_ADDRESS, basket);
    let (status, body) = send_request(req, configure_with(mailer, OrderPlacedProducer::default())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, OUT_OF_STOCK);
}

#[actix_web::test]
async fn place_order_when_stream_dispatch_fails() {
    let _ = env_logger::try_init().ok();
    let mut producer = MockStreamProducer::new();
    producer.expect_dispatch().returning(|_| Err(OrderStreamError::DispatchFailed("broker down".to_string())));
    let subscription = create_order_stream_subscription(producer);
    let stream_producer = subscription.producer();
    subscription.start();

    let mut mailer = MockMailClient::new();
    mailer.expect_send_message().times(1).returning(|_, _, _, _, _| Ok("Email sent successfully".to_string()));
    let req = order_request(USER, MAIL_ADDRESS, BASKET_WITH_OFFERS);
    let (status, body) = send_request(req, configure_with(mailer, stream_producer)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, CONFIRMATION);
}

fn configure_with(mailer: MockMailClient, producer: OrderPlacedProducer) -> impl FnOnce(&mut ServiceConfig) {
    move |cfg: &mut ServiceConfig| {
        let api =
            OrderFlowApi::new(Arc::new(Catalog::default()), Arc::new(OfferBook::default()), mailer, producer);
        cfg.app_data(web::Data::new(api))
            .service(web::resource(CALCULATIONS).route(web::get().to(calculations::<MockMailClient>)))
            .service(web::resource(ORDERS).route(web::post().to(place_order_route::<MockMailClient>)));
    }
}
