//! Default notification transports and event wiring.
//!
//! The engine only knows the [`MailTransport`] and [`OrderStreamProducer`] interfaces. The
//! implementations here write to the application log, which is enough to run the server end to
//! end; deployments substitute their own relay and stream clients when wiring up
//! [`crate::server::run_server`].

use std::sync::Arc;

use futures::future::BoxFuture;
use grocery_order_engine::{
    events::OrderPlacedSubscription,
    traits::{MailTransport, MailTransportError, OrderStreamError, OrderStreamProducer},
};
use log::*;

pub const ORDER_EVENT_BUFFER_SIZE: usize = 25;

/// Mail "relay" that prints the message to the log and reports acceptance.
#[derive(Debug, Clone, Default)]
pub struct LogMailClient;

impl MailTransport for LogMailClient {
    async fn send_message(
        &self,
        recipient_name: &str,
        recipient_address: &str,
        include_details: bool,
        subject: &str,
        body: &str,
    ) -> Result<String, MailTransportError> {
        info!("✉️ To {recipient_name} <{recipient_address}> [{subject}]: {body}");
        if include_details {
            trace!("✉️ Full order details requested for {recipient_address}");
        }
        Ok("Email sent successfully".to_string())
    }
}

/// Order-stream producer that logs the payload instead of talking to a broker.
#[derive(Debug, Clone, Default)]
pub struct LogStreamProducer;

impl OrderStreamProducer for LogStreamProducer {
    async fn dispatch(&self, message: String) -> Result<(), OrderStreamError> {
        info!("📨️ Order stream message: {message}");
        Ok(())
    }
}

/// Subscribes an [`OrderStreamProducer`] to the order-placed event.
///
/// The producer runs on detached handler tasks: a dispatch failure is logged and dropped, and the
/// request path never waits for it.
pub fn create_order_stream_subscription<P>(producer: P) -> OrderPlacedSubscription
where
    P: OrderStreamProducer + 'static,
{
    let producer = Arc::new(producer);
    OrderPlacedSubscription::new(ORDER_EVENT_BUFFER_SIZE, move |ev| {
        let payload = match serde_json::to_string(&ev.order) {
            Ok(payload) => payload,
            Err(e) => {
                error!("📨️ Could not serialize the order summary for the stream. {e}");
                return no_op();
            },
        };
        let producer = Arc::clone(&producer);
        Box::pin(async move {
            match producer.dispatch(payload).await {
                Ok(()) => debug!("📨️ Order by {} pushed to the stream", ev.order.customer_id),
                Err(e) => error!("📨️ Order stream dispatch failed. {e}"),
            }
        })
    })
}

fn no_op() -> BoxFuture<'static, ()> {
    Box::pin(async {})
}
