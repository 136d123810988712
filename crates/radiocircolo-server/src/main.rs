use radiocircolo_db::AppState;
use radiocircolo_mixcloud::{MixcloudClient, MixcloudConfig};
use radiocircolo_server::ServerConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env();

    // Database connection
    let db_config = radiocircolo_db::DatabaseConfig::from_env();
    tracing::info!("connecting to database...");
    let db = radiocircolo_db::connect(&db_config)
        .await
        .expect("failed to connect to database");
    tracing::info!("connected to database");

    let mixcloud_config = MixcloudConfig::from_env();
    tracing::info!(
        account = %mixcloud_config.username,
        limit = mixcloud_config.limit,
        timeout_secs = mixcloud_config.timeout_secs,
        "mixcloud catalog configured"
    );
    let mixcloud = MixcloudClient::new(&mixcloud_config).expect("failed to build HTTP client");

    let state = Arc::new(AppState {
        db,
        mixcloud: Arc::new(mixcloud),
    });

    tracing::info!(dir = %config.client_build_dir.display(), "serving web client");
    let app = radiocircolo_server::router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    tracing::info!(%addr, "server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(radiocircolo_server::shutdown_signal())
        .await
        .expect("server error");
}
