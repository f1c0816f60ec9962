use envconfig::Envconfig;
use tokio::signal;

use flags_mock::config::Config;
use flags_mock::server::serve;

async fn shutdown() {
    let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())
        .expect("failed to register SIGTERM handler");

    let mut interrupt = signal::unix::signal(signal::unix::SignalKind::interrupt())
        .expect("failed to register SIGINT handler");

    tokio::select! {
        _ = term.recv() => {},
        _ = interrupt.recv() => {},
    };

    tracing::info!("Shutting down gracefully...");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = Config::init_from_env().expect("Invalid configuration:");

    let listener = tokio::net::TcpListener::bind(config.bind())
        .await
        .expect("could not bind port");

    tracing::info!("mock flag management API running on port {}", config.port);
    tracing::info!("supported endpoints:");
    tracing::info!("  GET  /status");
    tracing::info!("  POST /api/v2/flags/{{projectKey}}");
    tracing::info!("  GET  /api/v2/flags/{{projectKey}}/{{flagKey}}");
    tracing::info!("  DELETE /api/v2/flags/{{projectKey}}/{{flagKey}}");
    tracing::info!("  POST /api/v2/flags/{{projectKey}}/{{flagKey}}/archive");

    serve(listener, shutdown()).await
}
