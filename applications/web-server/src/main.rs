/// Roster Web - static client server with SPA fallback
use clap::Parser;
use roster_web::{create_router, WebConfig};
use std::{net::SocketAddr, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-web")]
#[command(about = "Roster static web server", long_about = None)]
struct Cli {
    /// Directory to serve (overrides WEB_ROOT)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Port to listen on (overrides WEB_PORT)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_web=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = WebConfig::load()?;
    if let Some(root) = cli.root {
        config.root = root;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    if !config.has_index() {
        tracing::warn!(
            "No index.html in {}; unknown paths will return 404",
            config.root.display()
        );
    }

    let app = create_router(&config.root);

    let addr = SocketAddr::from((config.host.parse::<std::net::IpAddr>()?, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Frontend server running on {}", addr);
    tracing::info!("Serving files from {}", config.root.display());
    tracing::info!("CORS enabled for all origins");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
