//! radiocircolo-mixcloud — client for the Mixcloud catalog API.
//!
//! The catalog is the canonical list of shows; everything the backend serves
//! starts from one `cloudcasts` listing fetched per request.

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::MixcloudClient;
pub use config::MixcloudConfig;
pub use error::MixcloudError;
pub use models::{Cloudcast, CloudcastPage, Pictures};
