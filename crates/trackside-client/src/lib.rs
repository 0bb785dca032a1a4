//! REST client and polling primitives for the tracker server.
//!
//! This crate wraps the small JSON API surface the dashboard consumes into a
//! typed client and provides the periodic-refresh building block used by the
//! backend timers. It focuses on:
//! - Building role-scoped endpoint URLs from explicit configuration.
//! - One-shot fetches with a uniform [`NetworkError`] taxonomy.
//! - Cancellable polling that never stacks requests behind a slow network.
//!
//! Individual poll failures are reported and then forgotten: the dashboard
//! tolerates transient errors by showing stale data until the next tick.

mod error;
pub mod poller;
mod rest;

pub use crate::error::NetworkError;
pub use crate::rest::ApiClient;
