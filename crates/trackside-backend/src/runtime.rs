//! Backend runtime setup and orchestration.
//!
//! This module wires together configuration, shared state, the notification
//! timers, and the message dispatch loop that listens to frontend bridge
//! requests.

use std::{sync::Arc, thread};

use tokio::sync::{
    RwLock,
    mpsc::{Receiver, Sender},
};
use trackside_bridge::{MessageFromBackend, MessageToBackend};
use trackside_client::ApiClient;
use trackside_viewmodel::feed::NotificationFeed;

use crate::app::AppContext;
use crate::services;
use crate::state::State;

/// Initialize backend state and start processing frontend messages.
async fn setup_backend(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    let config = crate::config::load_config()
        .await
        .expect("failed to load config");

    let request_client = reqwest::Client::new();
    let api = Arc::new(ApiClient::new(request_client, &config.server));

    let state = Arc::new(RwLock::new(State {
        config,
        api,
        feed: NotificationFeed::new(),
        notification_polls: Vec::new(),
        dashboard_poll: None,
    }));

    let context = Arc::new(AppContext { state, tx });
    services::notification_service::start_polling(context.clone()).await;
    context.consume_bridge_messages(rx).await;
}

/// Spawn the backend runtime and begin processing bridge messages.
pub fn run(rx: Receiver<MessageToBackend>, tx: Sender<MessageFromBackend>) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("failed to build tokio runtime");
        runtime.block_on(async { setup_backend(rx, tx).await });
    });
}
