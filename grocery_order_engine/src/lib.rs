//! Grocery Order Engine
//!
//! The engine contains the core logic for pricing grocery baskets and fulfilling orders. It is
//! transport-agnostic: the two customer notification channels are defined as traits
//! ([`traits::MailTransport`] and [`traits::OrderStreamProducer`]) that the hosting server wires up
//! with concrete clients.
//!
//! The library is divided into three main sections:
//! 1. The catalog and promotions ([`mod@catalog`], [`mod@offers`]). These are built once at process
//!    start and shared read-only across requests; nothing in the engine mutates them.
//! 2. The pricing and fulfilment API ([`mod@pricing`], [`mod@stock`], [`mod@notify`] and
//!    [`OrderFlowApi`]). `OrderFlowApi` carries a basket from submission to a customer-facing
//!    response.
//! 3. An event subsystem ([`mod@events`]). When an order is placed, an `OrderPlacedEvent` is
//!    emitted and handled on detached tasks, so subscribers (such as the order stream) can never
//!    delay or fail a request.

pub mod catalog;
pub mod events;
pub mod notify;
pub mod offers;
mod order_flow_api;
pub mod order_objects;
pub mod pricing;
pub mod stock;
pub mod traits;

pub use order_flow_api::{OrderFlowApi, OrderOutcome};
