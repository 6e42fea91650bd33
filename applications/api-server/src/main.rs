/// Roster API - user CRUD service over PostgreSQL
use clap::{Parser, Subcommand};
use roster_api::{create_router, init_database, AppState, ServerConfig};
use roster_core::UserStore;
use roster_storage::PgStorageContext;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-api")]
#[command(about = "Roster user API service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Create the users table if missing, then exit
    InitDb,
    /// List all users, newest first
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_api=info,roster_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await?,
        Commands::InitDb => init_db(config).await?,
        Commands::ListUsers => list_users(config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster API");
    tracing::info!("Database host: {}", config.database.host);
    tracing::info!("Database name: {}", config.database.name);

    let pool = roster_storage::create_pool(&config.database)?;
    if !init_database(&pool).await {
        tracing::warn!("Continuing without a verified schema; requests may fail");
    }

    let store = Arc::new(PgStorageContext::new(pool));
    let app = create_router(AppState::new(store.clone()));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API endpoint: http://{}/api", addr);
    tracing::info!("CORS enabled for all origins");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Closing database pool");
    store.close().await;

    Ok(())
}

async fn init_db(config: ServerConfig) -> anyhow::Result<()> {
    let pool = roster_storage::create_pool(&config.database)?;
    roster_storage::ensure_schema(&pool).await?;

    let count = roster_storage::users::count(&pool).await?;
    println!("Table \"users\" is ready ({} users)", count);

    pool.close().await;
    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let pool = roster_storage::create_pool(&config.database)?;
    let users = roster_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        println!(
            "  {} - {} <{}> ({})",
            user.id, user.name, user.email, user.created_at
        );
    }

    pool.close().await;
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
