use std::{future::Future, pin::Pin, sync::Arc};

use super::channel::{EventHandler, EventProducer};
use crate::order_objects::OrderSummary;

/// Emitted once an order has been priced and the primary notification attempted. Subscribers get a
/// copy of the summary and nothing else; they have no access to engine state.
#[derive(Clone, Debug)]
pub struct OrderPlacedEvent {
    pub order: OrderSummary,
}

impl OrderPlacedEvent {
    pub fn new(order: OrderSummary) -> Self {
        Self { order }
    }
}

/// The publishing side, handed to the notification coordinator. A default producer has no
/// subscriber and publishing through it is a no-op.
#[derive(Default, Clone)]
pub struct OrderPlacedProducer {
    subscriber: Option<EventProducer<OrderPlacedEvent>>,
}

impl OrderPlacedProducer {
    /// Publish the event to the subscriber, if one was registered. Returns whether the event was
    /// handed off; handling happens later, on a detached task.
    pub async fn publish(&self, event: OrderPlacedEvent) -> bool {
        match &self.subscriber {
            Some(producer) => {
                producer.publish_event(event).await;
                true
            },
            None => false,
        }
    }
}

/// Dispatch wiring for the one event this engine emits. Register a handler, hand
/// [`Self::producer`] clones to the engine, then [`Self::start`] the dispatch loop.
pub struct OrderPlacedSubscription {
    handler: EventHandler<OrderPlacedEvent>,
}

impl OrderPlacedSubscription {
    pub fn new<F>(buffer_size: usize, handler: F) -> Self
    where F: (Fn(OrderPlacedEvent) -> Pin<Box<dyn Future<Output = ()> + Send>>) + Send + Sync + 'static {
        Self { handler: EventHandler::new(buffer_size, Arc::new(handler)) }
    }

    pub fn producer(&self) -> OrderPlacedProducer {
        OrderPlacedProducer { subscriber: Some(self.handler.subscribe()) }
    }

    /// Spawn the dispatch loop. The loop drains and shuts down once the last producer clone is
    /// dropped.
    pub fn start(self) {
        tokio::spawn(async move {
            self.handler.start_handler().await;
        });
    }
}
