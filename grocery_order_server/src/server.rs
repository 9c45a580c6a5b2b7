use std::{sync::Arc, time::Duration};

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use grocery_order_engine::{
    catalog::Catalog,
    events::OrderPlacedProducer,
    offers::OfferBook,
    traits::MailTransport,
    OrderFlowApi,
};
use log::*;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::{create_order_stream_subscription, LogMailClient, LogStreamProducer},
    routes::{calculations, health, place_order, CALCULATIONS, ORDERS},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let subscription = create_order_stream_subscription(LogStreamProducer);
    let producer = subscription.producer();
    subscription.start();
    let srv = create_server_instance(config, LogMailClient, producer)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance<M>(
    config: ServerConfig,
    mailer: M,
    producer: OrderPlacedProducer,
) -> Result<Server, ServerError>
where
    M: MailTransport + Clone + Send + 'static,
{
    let catalog = Arc::new(Catalog::default());
    let offers = Arc::new(OfferBook::default());
    info!("🪛️ Catalog loaded with {} product(s)", catalog.len());
    let srv = HttpServer::new(move || {
        let orders_api =
            OrderFlowApi::new(Arc::clone(&catalog), Arc::clone(&offers), mailer.clone(), producer.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("gos::access_log"))
            .app_data(web::Data::new(orders_api))
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| ServerError::InvalidRequestBody(err.to_string()).into()),
            )
            .service(health)
            .service(web::resource(CALCULATIONS).route(web::get().to(calculations::<M>)))
            .service(web::resource(ORDERS).route(web::post().to(place_order::<M>)))
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
