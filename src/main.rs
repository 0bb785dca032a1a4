fn main() {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_threads(true)
        .with_local_timestamps()
        .init()
        .expect("failed to build logger instance");

    let channels = trackside_bridge::BridgeChannels::default();
    trackside_backend::run(channels.backend_rx, channels.backend_tx);
    trackside_frontend::run(channels.frontend_rx, channels.frontend_tx)
        .expect("failed to run frontend");
}
