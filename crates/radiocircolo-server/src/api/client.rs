//! Serving of the prebuilt single-page client.
//!
//! Files at the top of the build directory get explicit routes so they are not
//! captured by `/{slug}`. Anything deeper goes through `ServeDir`, and paths
//! that match no file fall back to `index.html` for client-side routing.

use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Paths the API owns; a build file with one of these names is not routed.
const RESERVED: &[&str] = &["healthz"];

pub fn client_router<S>(build_dir: &Path) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let mut router = Router::new();

    match std::fs::read_dir(build_dir) {
        Ok(entries) => {
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_file() {
                    continue;
                }
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                if !is_routable(name) {
                    tracing::debug!(file = name, "skipping client file");
                    continue;
                }
                router = router.route_service(&route_path(name), ServeFile::new(&path));
            }
        }
        Err(e) => {
            tracing::warn!(
                dir = %build_dir.display(),
                "client build directory unreadable, only the API will be served: {e}"
            );
        }
    }

    let index = build_dir.join("index.html");
    router.fallback_service(ServeDir::new(build_dir).fallback(ServeFile::new(index)))
}

fn is_routable(name: &str) -> bool {
    !name.is_empty() && !RESERVED.contains(&name)
}

/// Request path of a top-level file as a client sends it.
///
/// Routes match the raw path, so names needing escapes are registered in
/// percent-encoded form.
fn route_path(name: &str) -> String {
    format!("/{}", urlencoding::encode(name))
}
