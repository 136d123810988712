// Shared test utilities for integration tests
#![allow(dead_code)]

use radiocircolo_db::entities::podcast;
use radiocircolo_db::AppState;
use radiocircolo_mixcloud::{MixcloudClient, MixcloudConfig};
use radiocircolo_server::ServerConfig;
use sea_orm::DatabaseConnection;
use std::path::Path;
use std::sync::Arc;

pub const TEST_USERNAME: &str = "radiocircolo";
pub const TEST_CLIENT_ID: &str = "test-client-id";

/// Mixcloud client pointed at a mock server, with a short timeout.
pub fn test_mixcloud(api_url: &str) -> MixcloudClient {
    MixcloudClient::new(&MixcloudConfig {
        api_url: api_url.to_string(),
        username: TEST_USERNAME.to_string(),
        client_id: TEST_CLIENT_ID.to_string(),
        limit: 100,
        timeout_secs: 1,
    })
    .unwrap()
}

/// Create a test AppState with a mock database and a mocked Mixcloud API
pub fn test_app_state(db: DatabaseConnection, api_url: &str) -> Arc<AppState> {
    Arc::new(AppState {
        db,
        mixcloud: Arc::new(test_mixcloud(api_url)),
    })
}

pub fn test_config(client_build_dir: &Path) -> ServerConfig {
    ServerConfig {
        port: 0,
        cors_origins: vec!["https://radiocircolo.onrender.com".to_string()],
        client_build_dir: client_build_dir.to_path_buf(),
    }
}

pub fn cloudcast_json(slug: &str) -> serde_json::Value {
    serde_json::json!({
        "key": format!("/{TEST_USERNAME}/{slug}/"),
        "url": format!("https://www.mixcloud.com/{TEST_USERNAME}/{slug}/"),
        "name": format!("Show {slug}"),
        "slug": slug,
        "pictures": {
            "1024wx1024h": format!("https://img/{slug}-1024.jpg"),
            "extra_large": format!("https://img/{slug}-xl.jpg"),
            "thumbnail": format!("https://img/{slug}-thumb.jpg")
        }
    })
}

pub fn listing_json(slugs: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "data": slugs.iter().map(|s| cloudcast_json(s)).collect::<Vec<_>>(),
        "paging": {}
    })
}

pub fn record(id: i32, slug: &str) -> podcast::Model {
    podcast::Model {
        id,
        slug: slug.to_string(),
        name: None,
        description: None,
        members: None,
        link_name: None,
        link: None,
        track_list: None,
    }
}
