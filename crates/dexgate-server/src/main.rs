mod app;
mod cli;
mod error;
mod routes;
mod state;
mod telemetry;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use dexgate_core::{FavoritesStore, Gateway, PokeApiAdapter};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::cli::Cli;
use crate::error::ServerError;
use crate::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let cli = Cli::parse();
    telemetry::init_tracing(&cli.log_level, cli.log_json)?;

    let upstream = cli.upstream_config();
    let source = Arc::new(PokeApiAdapter::new(upstream.clone())?);
    let gateway = Gateway::new(source, Arc::new(FavoritesStore::new()));
    let router = app::build_router(AppState::new(gateway), app::cors_layer(&cli.cors_origin)?);

    let address = cli.address();
    let listener = TcpListener::bind(address).await?;
    info!(
        %address,
        upstream = upstream.base_url(),
        resource = %upstream.resource,
        timeout_ms = upstream.timeout_ms,
        "dexgate server listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("dexgate server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            warn!(error = %error, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                warn!(error = %error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received ctrl-c, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
