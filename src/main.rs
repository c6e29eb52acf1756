//! Service entry point: loads configuration, wires adapters and serves HTTP.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use lifedesk::adapters::auth::JwtAccessTokenValidator;
use lifedesk::adapters::events::{LoggingEventPublisher, RedisEventPublisher};
use lifedesk::adapters::http::{build_router, AppPorts};
use lifedesk::adapters::postgres;
use lifedesk::config::{AppConfig, DatabaseBackend, MessagingConfig};
use lifedesk::ports::{AccessTokenValidator, EventPublisher};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let publisher = event_publisher(&config.messaging).await;
    let token_validator: Arc<dyn AccessTokenValidator> = Arc::new(JwtAccessTokenValidator::new(
        config.auth.jwt_secret.expose_secret().as_bytes(),
        config.auth.issuer.clone(),
        config.auth.audience.clone(),
    ));

    let ports = match config.database.backend {
        DatabaseBackend::Postgres => {
            let pool = postgres::connect(&config.database).await?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool).await?;
                info!("database migrations applied");
            }
            AppPorts::postgres(pool, publisher, token_validator)
        }
        DatabaseBackend::Memory => {
            warn!("using in-memory repositories; data will not survive a restart");
            AppPorts::in_memory(publisher, token_validator)
        }
    };

    let router = build_router(&ports, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "lifedesk listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("lifedesk stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let result = if config.is_production() {
        fmt().with_env_filter(filter).json().try_init()
    } else {
        fmt().with_env_filter(filter).pretty().try_init()
    };
    if let Err(e) = result {
        eprintln!("tracing init failed: {e}");
    }
}

/// Redis when a broker URL is configured and reachable, otherwise the
/// tracing-only publisher.
async fn event_publisher(config: &MessagingConfig) -> Arc<dyn EventPublisher> {
    let Some(url) = &config.redis_url else {
        info!("no message broker configured; events are logged only");
        return Arc::new(LoggingEventPublisher);
    };

    match RedisEventPublisher::connect(url, config.exchange.clone()).await {
        Ok(publisher) => {
            info!(exchange = %config.exchange, "publishing events to redis");
            Arc::new(publisher)
        }
        Err(e) => {
            warn!(error = %e, "redis unavailable; events are logged only");
            Arc::new(LoggingEventPublisher)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
