use log::*;

use crate::{
    events::{OrderPlacedEvent, OrderPlacedProducer},
    order_objects::{NotificationOutcome, OrderSummary},
    traits::{MailTransport, MailTransportError},
};

/// The fixed response for a basket the grocer cannot fulfil. Also returned when the mail relay is
/// unreachable (see [`crate::OrderFlowApi::place_order`]).
pub const OUT_OF_STOCK_MESSAGE: &str = "These goods are out of stock. Please place another order.";

const MAIL_SUBJECT: &str = "Your grocery order";

/// Attempts the two notification channels for a priced order and composes the confirmation text.
///
/// The mail channel is synchronous; its connectivity failures propagate to the workflow. The order
/// stream is fire-and-forget: the event is handed to the producer and handled on a detached task,
/// so nothing that happens on the stream can reach the customer. No retries are performed on
/// either channel.
pub struct NotificationCoordinator<M: MailTransport> {
    mailer: M,
    producer: OrderPlacedProducer,
}

impl<M: MailTransport> NotificationCoordinator<M> {
    pub fn new(mailer: M, producer: OrderPlacedProducer) -> Self {
        Self { mailer, producer }
    }

    pub async fn notify(&self, order: &OrderSummary) -> Result<(String, NotificationOutcome), MailTransportError> {
        let message = confirmation_message(order);
        let status =
            self.mailer.send_message(&order.customer_id, &order.mail_address, true, MAIL_SUBJECT, &message).await?;
        // Whatever status the relay reports, the customer reads the same confirmation: the
        // storefront contract has no separate text for a mail that was accepted but not sent.
        debug!("🧺️✉️ Mail relay replied for {}'s order: {status}", order.customer_id);
        trace!("🧺️📬️ Publishing order-placed event for {}", order.customer_id);
        let secondary_dispatched = self.producer.publish(OrderPlacedEvent::new(order.clone())).await;
        let outcome = NotificationOutcome { primary_accepted: true, primary_status: status, secondary_dispatched };
        Ok((message, outcome))
    }
}

fn confirmation_message(order: &OrderSummary) -> String {
    format!(
        "Dear {}! You placed order that contains {} and costs {}. We sent you details to {}",
        order.customer_id,
        order.contents(),
        order.total,
        order.mail_address
    )
}

#[cfg(test)]
mod test {
    use gos_common::Money;

    use super::*;
    use crate::order_objects::{PricedItem, PricingResult};

    #[test]
    fn confirmation_text_matches_the_storefront_contract() {
        let priced = PricingResult {
            items: vec![
                PricedItem { name: "orange".into(), quantity: 3, charged_units: 2, cost: Money::from_cents(50) },
                PricedItem { name: "apple".into(), quantity: 2, charged_units: 1, cost: Money::from_cents(60) },
            ],
            total: Money::from_cents(110),
        };
        let summary = OrderSummary::new("USER_ID", "my.address@gmail.com", priced);
        assert_eq!(
            confirmation_message(&summary),
            "Dear USER_ID! You placed order that contains [{orange=3, apple=2}] and costs $1.1. We sent you details \
             to my.address@gmail.com"
        );
    }
}
