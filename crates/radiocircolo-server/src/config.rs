use std::env;
use std::path::PathBuf;

/// Origin of the deployed web client.
pub const DEFAULT_CORS_ORIGIN: &str = "https://radiocircolo.onrender.com";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Origins allowed to call the API from a browser.
    pub cors_origins: Vec<String>,
    /// Directory holding the prebuilt single-page client.
    pub client_build_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5002);

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
        );

        let client_build_dir = env::var("CLIENT_BUILD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("client/build"));

        Self {
            port,
            cors_origins,
            client_build_dir,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
