/// Pulse Server - reporting API for the business dashboard
use anyhow::Context;
use clap::{Parser, Subcommand};
use pulse_core::Backend;
use pulse_server::{
    config::{ServerConfig, StorageBackend},
    create_router,
    services::AuthService,
    state::AppState,
};
use pulse_storage::{SampleStore, SqliteStore};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pulse-server")]
#[command(about = "Pulse reporting API server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./pulse.toml when present)
    #[arg(short, long, global = true, env = "PULSE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Load the sample catalog into the SQLite database
    Seed {
        /// Clear customers, team members, and reports first
        #[arg(long)]
        reset: bool,
    },
    /// Create a dashboard user for jwt auth mode
    AddUser {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long, default_value = "member")]
        role: String,
    },
    /// List all dashboard users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pulse_server=info,pulse_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Seed { reset } => seed(&config, reset).await?,
        Commands::AddUser {
            email,
            name,
            password,
            role,
        } => add_user(&config, &email, &name, &password, &role).await?,
        Commands::ListUsers => list_users(&config).await?,
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Pulse Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Auth mode: {:?}", config.auth.mode);

    let store: Arc<dyn Backend> = match config.storage.backend {
        StorageBackend::Sample => {
            tracing::info!("Serving the in-memory sample catalog");
            Arc::new(SampleStore::new())
        }
        StorageBackend::Sqlite => {
            let store = open_sqlite(&config).await?;
            if config.storage.seed_if_empty {
                store.seed(false).await?;
            }
            Arc::new(store)
        }
    };

    let app_state = AppState::from_config(store, &config);
    let app = create_router(app_state, &config.server);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("invalid server.host '{}'", config.server.host))?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}

async fn open_sqlite(config: &ServerConfig) -> anyhow::Result<SqliteStore> {
    if config.storage.backend != StorageBackend::Sqlite {
        tracing::warn!("storage.backend is not sqlite; the running server will not read this database");
    }

    let pool = pulse_storage::create_pool(&config.storage.database_url)
        .await
        .with_context(|| format!("failed to open {}", config.storage.database_url))?;
    pulse_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    Ok(SqliteStore::new(pool))
}

async fn seed(config: &ServerConfig, reset: bool) -> anyhow::Result<()> {
    let store = open_sqlite(config).await?;
    let summary = store.seed(reset).await?;

    if summary.is_empty() {
        println!("Database already populated; pass --reset to reload the sample data");
    } else {
        println!(
            "Seeded {} customers, {} team members, {} reports",
            summary.customers, summary.team_members, summary.reports
        );
    }

    Ok(())
}

async fn add_user(
    config: &ServerConfig,
    email: &str,
    name: &str,
    password: &str,
    role: &str,
) -> anyhow::Result<()> {
    let store = open_sqlite(config).await?;
    let auth_service = AuthService::from_settings(&config.auth);

    let password_hash = auth_service.hash_password(password)?;
    let user = pulse_storage::users::create(store.pool(), email, name, role, &password_hash).await?;

    println!("Created user {} <{}> ({})", user.id, user.email, user.role);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_sqlite(config).await?;
    let users = pulse_storage::users::get_all(store.pool()).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}> ({})", user.id, user.name, user.email, user.role);
    }

    Ok(())
}
