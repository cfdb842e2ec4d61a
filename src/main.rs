use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use admin_session::{
    AppState,
    cache::RedisSessionStore,
    config::Config,
    router::create_router,
    session::{MemorySessionStore, SessionStore},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const PURGE_INTERVAL: Duration = Duration::from_secs(300);

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.is_production {
        tracing::info!("Running in production mode, session cookies are Secure");
    } else {
        tracing::info!("Running outside production, session cookies are not Secure");
    }

    let sessions: Arc<dyn SessionStore> = match &config.redis_url {
        Some(redis_url) => match redis::Client::open(redis_url.as_str()) {
            Ok(client) => {
                tracing::info!("Using Redis session store");
                Arc::new(RedisSessionStore::new(Arc::new(client)))
            }
            Err(e) => {
                tracing::error!("Failed to create Redis client: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::warn!("REDIS_URL not set, sessions are kept in memory");
            let memory = Arc::new(MemorySessionStore::new());
            spawn_purge_task(Arc::clone(&memory));
            memory
        }
    };

    let state = AppState {
        config: config.clone(),
        sessions,
    };

    let router = create_router(state);

    // Permissive CORS in debug builds only
    #[cfg(debug_assertions)]
    let router = {
        tracing::debug!("Adding CORS layer for development mode");
        router.layer(tower_http::cors::CorsLayer::permissive())
    };

    let addr = SocketAddr::new(
        config.server_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid server_host, falling back to dual-stack default");
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        }),
        config.server_port,
    );

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

fn spawn_purge_task(store: Arc<MemorySessionStore>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = store.purge_expired().await;
            if purged > 0 {
                tracing::debug!("Purged {} expired admin sessions", purged);
            }
        }
    });
}
