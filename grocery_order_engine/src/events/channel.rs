//! Simple stateless pub-sub plumbing for engine events.
//!
//! Subscribers register an async handler; the engine publishes events into a bounded channel and
//! each event is handled on its own detached task. Handlers may be slow or fall over without
//! affecting the publishing side: the dispatch loop logs a task that did not run to completion and
//! carries on.
use std::{future::Future, pin::Pin, sync::Arc};

use log::*;
use tokio::{sync::mpsc, task::JoinSet};

pub type Handler<E> = Arc<dyn Fn(E) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync>;

pub struct EventHandler<E: Send + Sync + 'static> {
    listener: mpsc::Receiver<E>,
    sender: mpsc::Sender<E>,
    handler: Handler<E>,
}

impl<E: Send + Sync + 'static> EventHandler<E> {
    pub fn new(buffer_size: usize, handler: Handler<E>) -> Self {
        let (sender, listener) = mpsc::channel(buffer_size);
        Self { listener, sender, handler }
    }

    pub fn subscribe(&self) -> EventProducer<E> {
        EventProducer::new(self.sender.clone())
    }

    /// Dispatch events until the last producer is dropped, then drain the in-flight handler tasks.
    pub async fn start_handler(mut self) {
        debug!("📬️ Starting event handler");
        // The internal sender has to go first, otherwise the recv loop below never terminates.
        drop(self.sender);
        let mut tasks = JoinSet::new();
        while let Some(ev) = self.listener.recv().await {
            trace!("📬️ Handling event");
            let handler = Arc::clone(&self.handler);
            tasks.spawn(async move {
                (handler)(ev).await;
            });
        }
        while let Some(result) = tasks.join_next().await {
            if let Err(e) = result {
                warn!("📬️ An event handler task did not run to completion. {e}");
            }
        }
        debug!("📬️ Event handler has shut down");
    }
}

#[derive(Clone)]
pub struct EventProducer<E: Send + Sync> {
    sender: mpsc::Sender<E>,
}

impl<E: Send + Sync> EventProducer<E> {
    pub fn new(sender: mpsc::Sender<E>) -> Self {
        Self { sender }
    }

    pub async fn publish_event(&self, event: E) {
        if let Err(e) = self.sender.send(event).await {
            error!("📬️ Failed to send event: {e}");
        }
    }
}
