use std::{fmt::Debug, sync::Arc};

use log::*;

use crate::{
    catalog::Catalog,
    events::OrderPlacedProducer,
    notify::NotificationCoordinator,
    offers::OfferBook,
    order_objects::{Basket, NotificationOutcome, OrderSummary, PricingResult},
    pricing::PricingEngine,
    stock::StockChecker,
    traits::{MailTransport, MailTransportError},
};

/// Terminal states of the order fulfilment workflow.
#[derive(Debug, Clone)]
pub enum OrderOutcome {
    /// The order went through. `message` is the text shown to the customer.
    Confirmed { message: String, notification: NotificationOutcome },
    /// The basket cannot be fulfilled as submitted. An unreachable mail relay also lands here; the
    /// storefront contract has no other response for it.
    OutOfStock,
}

/// `OrderFlowApi` is the primary API for quoting baskets and fulfilling orders. It carries a basket
/// from submission to a customer-facing response: tally once, gate on stock, price, notify.
pub struct OrderFlowApi<M: MailTransport> {
    pricer: PricingEngine,
    stock: StockChecker,
    notifier: NotificationCoordinator<M>,
}

impl<M: MailTransport> Debug for OrderFlowApi<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<M: MailTransport> OrderFlowApi<M> {
    pub fn new(catalog: Arc<Catalog>, offers: Arc<OfferBook>, mailer: M, producer: OrderPlacedProducer) -> Self {
        let pricer = PricingEngine::new(Arc::clone(&catalog), offers);
        let stock = StockChecker::new(catalog);
        let notifier = NotificationCoordinator::new(mailer, producer);
        Self { pricer, stock, notifier }
    }

    /// Price a basket without placing an order. No stock is checked and nobody is notified; the
    /// same basket can be quoted any number of times.
    pub fn quote(&self, basket: &Basket) -> PricingResult {
        let tally = basket.tally();
        let result = self.pricer.price(&tally);
        debug!("🧺️ Quoted {} line(s) at {}", result.items.len(), result.total);
        result
    }

    /// Run the fulfilment workflow for a basket.
    ///
    /// The basket is tallied once and the tally feeds both the stock check and the pricing engine.
    /// A shortfall short-circuits to [`OrderOutcome::OutOfStock`] before anything is priced or any
    /// notification is attempted.
    pub async fn place_order(&self, customer_id: &str, basket: &Basket, mail_address: &str) -> OrderOutcome {
        let tally = basket.tally();
        if !self.stock.has_sufficient_stock(&tally).is_sufficient() {
            debug!("🧺️ Order by {customer_id} rejected: insufficient stock");
            return OrderOutcome::OutOfStock;
        }
        let priced = self.pricer.price(&tally);
        let summary = OrderSummary::new(customer_id, mail_address, priced);
        match self.notifier.notify(&summary).await {
            Ok((message, notification)) => {
                debug!("🧺️ Order by {customer_id} for {} confirmed", summary.total);
                OrderOutcome::Confirmed { message, notification }
            },
            Err(MailTransportError::Unreachable(e)) => {
                // Legacy remap: the storefront only understands "confirmed" and "out of stock", so
                // a relay outage is reported as the latter.
                warn!("🧺️ Mail relay unreachable; reporting {customer_id}'s order as out of stock. {e}");
                OrderOutcome::OutOfStock
            },
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        future::Future,
        pin::Pin,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{events::OrderPlacedSubscription, traits::MailTransportError};

    const CONFIRMATION: &str = "Dear USER_ID! You placed order that contains [{orange=3, apple=2}] and costs $1.1. \
                                We sent you details to my.address@gmail.com";

    #[derive(Clone)]
    enum MailMode {
        Accept(&'static str),
        Unreachable,
    }

    #[derive(Clone)]
    struct StubMailer {
        mode: MailMode,
        calls: Arc<AtomicUsize>,
    }

    impl StubMailer {
        fn new(mode: MailMode) -> Self {
            Self { mode, calls: Arc::new(AtomicUsize::new(0)) }
        }
    }

    impl MailTransport for StubMailer {
        async fn send_message(
            &self,
            _recipient_name: &str,
            _recipient_address: &str,
            _include_details: bool,
            _subject: &str,
            _body: &str,
        ) -> Result<String, MailTransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.mode {
                MailMode::Accept(status) => Ok(status.to_string()),
                MailMode::Unreachable => Err(MailTransportError::Unreachable("connection refused".to_string())),
            }
        }
    }

    fn api(mailer: StubMailer, producer: OrderPlacedProducer) -> OrderFlowApi<StubMailer> {
        OrderFlowApi::new(Arc::new(Catalog::default()), Arc::new(OfferBook::default()), mailer, producer)
    }

    fn basket(names: &[&str]) -> Basket {
        Basket::new(names.iter().map(|n| n.to_string()).collect())
    }

    fn offers_basket() -> Basket {
        basket(&["orange", "apple", "apple", "orange", "orange", "cucumber"])
    }

    #[tokio::test]
    async fn a_confirmed_order_reports_the_contents_cost_and_address() {
        let _ = env_logger::try_init();
        let mailer = StubMailer::new(MailMode::Accept("Email sent successfully"));
        let api = api(mailer.clone(), OrderPlacedProducer::default());
        let outcome = api.place_order("USER_ID", &offers_basket(), "my.address@gmail.com").await;
        match outcome {
            OrderOutcome::Confirmed { message, notification } => {
                assert_eq!(message, CONFIRMATION);
                assert!(notification.primary_accepted);
                assert_eq!(notification.primary_status, "Email sent successfully");
                assert!(!notification.secondary_dispatched);
            },
            OrderOutcome::OutOfStock => panic!("Order should have been confirmed"),
        }
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn a_soft_mail_failure_still_confirms_with_the_same_text() {
        let _ = env_logger::try_init();
        let api = api(StubMailer::new(MailMode::Accept("Email wasn't sent")), OrderPlacedProducer::default());
        let outcome = api.place_order("USER_ID", &offers_basket(), "my.address@gmail.com").await;
        match outcome {
            OrderOutcome::Confirmed { message, notification } => {
                assert_eq!(message, CONFIRMATION);
                assert_eq!(notification.primary_status, "Email wasn't sent");
            },
            OrderOutcome::OutOfStock => panic!("A soft failure must not fail the order"),
        }
    }

    #[tokio::test]
    async fn an_unreachable_relay_reads_as_out_of_stock() {
        let _ = env_logger::try_init();
        let api = api(StubMailer::new(MailMode::Unreachable), OrderPlacedProducer::default());
        let outcome = api.place_order("USER_ID", &offers_basket(), "my.address@gmail.com").await;
        assert!(matches!(outcome, OrderOutcome::OutOfStock));
    }

    #[tokio::test]
    async fn a_stock_shortfall_skips_notification_entirely() {
        let _ = env_logger::try_init();
        let mailer = StubMailer::new(MailMode::Accept("Email sent successfully"));
        let api = api(mailer.clone(), OrderPlacedProducer::default());
        let mut names = vec!["orange"];
        names.extend(["apple"; 10]);
        let outcome = api.place_order("USER_ID", &basket(&names), "my.address@gmail.com").await;
        assert!(matches!(outcome, OrderOutcome::OutOfStock));
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn a_failing_stream_handler_does_not_affect_the_order() {
        let _ = env_logger::try_init();
        let subscription = OrderPlacedSubscription::new(4, |_ev| {
            Box::pin(async {
                panic!("order stream is down");
            }) as Pin<Box<dyn Future<Output = ()> + Send>>
        });
        let producer = subscription.producer();
        subscription.start();
        let api = api(StubMailer::new(MailMode::Accept("Email sent successfully")), producer);
        let outcome = api.place_order("USER_ID", &offers_basket(), "my.address@gmail.com").await;
        match outcome {
            OrderOutcome::Confirmed { message, notification } => {
                assert_eq!(message, CONFIRMATION);
                assert!(notification.secondary_dispatched);
            },
            OrderOutcome::OutOfStock => panic!("A stream failure must not fail the order"),
        }
    }

    #[tokio::test]
    async fn quoting_never_touches_the_mail_relay() {
        let _ = env_logger::try_init();
        let mailer = StubMailer::new(MailMode::Unreachable);
        let api = api(mailer.clone(), OrderPlacedProducer::default());
        let result = api.quote(&offers_basket());
        assert_eq!(result.total.to_string(), "$1.1");
        assert_eq!(mailer.calls.load(Ordering::SeqCst), 0);
    }
}
