//! HTTP client for the Mixcloud catalog.

use std::time::Duration;

use tracing::debug;

use crate::config::MixcloudConfig;
use crate::error::MixcloudError;
use crate::models::{Cloudcast, CloudcastPage};

const USER_AGENT: &str = concat!("Radiocircolo/", env!("CARGO_PKG_VERSION"));

/// Fetches the show listing of one Mixcloud account.
#[derive(Debug, Clone)]
pub struct MixcloudClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    client_id: String,
    limit: u32,
}

impl MixcloudClient {
    pub fn new(config: &MixcloudConfig) -> Result<Self, MixcloudError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            client_id: config.client_id.clone(),
            limit: config.limit,
        })
    }

    /// URL of the account's cloudcast listing, without query parameters.
    fn listing_url(&self) -> String {
        format!(
            "{}/{}/cloudcasts/",
            self.base_url,
            urlencoding::encode(&self.username)
        )
    }

    /// Fetch up to `limit` cloudcasts, in the order Mixcloud returns them.
    pub async fn cloudcasts(&self) -> Result<Vec<Cloudcast>, MixcloudError> {
        let url = self.listing_url();
        debug!(url = %url, limit = self.limit, "fetching mixcloud listing");

        let resp = self
            .http
            .get(&url)
            .query(&[
                ("limit", self.limit.to_string()),
                ("client_id", self.client_id.clone()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(MixcloudError::Status(status));
        }

        let page: CloudcastPage = resp.json().await?;
        debug!(count = page.data.len(), "mixcloud listing received");
        Ok(page.data)
    }

    /// First cloudcast whose slug matches exactly.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Cloudcast>, MixcloudError> {
        Ok(self
            .cloudcasts()
            .await?
            .into_iter()
            .find(|c| c.slug == slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(api_url: &str) -> MixcloudConfig {
        MixcloudConfig {
            api_url: api_url.to_string(),
            username: "radiocircolo".to_string(),
            client_id: "test-client".to_string(),
            limit: 100,
            timeout_secs: 1,
        }
    }

    fn show(slug: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "key": format!("/radiocircolo/{slug}/"),
            "url": format!("https://www.mixcloud.com/radiocircolo/{slug}/"),
            "name": name,
            "slug": slug,
            "pictures": {
                "1024wx1024h": format!("https://img/{slug}-1024.jpg"),
                "extra_large": format!("https://img/{slug}-xl.jpg")
            }
        })
    }

    #[test]
    fn test_listing_url_trims_trailing_slash() {
        let client = MixcloudClient::new(&test_config("http://localhost:9999/")).unwrap();
        assert_eq!(
            client.listing_url(),
            "http://localhost:9999/radiocircolo/cloudcasts/"
        );
    }

    #[test]
    fn test_listing_url_encodes_username() {
        let mut config = test_config("http://localhost:9999");
        config.username = "radio circolo".to_string();
        let client = MixcloudClient::new(&config).unwrap();
        assert_eq!(
            client.listing_url(),
            "http://localhost:9999/radio%20circolo/cloudcasts/"
        );
    }

    #[tokio::test]
    async fn test_cloudcasts_sends_limit_and_client_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/radiocircolo/cloudcasts/"))
            .and(query_param("limit", "100"))
            .and(query_param("client_id", "test-client"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [show("a", "A"), show("b", "B")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = MixcloudClient::new(&test_config(&server.uri())).unwrap();
        let shows = client.cloudcasts().await.unwrap();

        let slugs: Vec<_> = shows.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["a", "b"]);
    }

    #[tokio::test]
    async fn test_cloudcasts_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = MixcloudClient::new(&test_config(&server.uri())).unwrap();
        let err = client.cloudcasts().await.unwrap_err();
        assert!(matches!(err, MixcloudError::Status(s) if s.as_u16() == 503));
    }

    #[tokio::test]
    async fn test_cloudcasts_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = MixcloudClient::new(&test_config(&server.uri())).unwrap();
        let err = client.cloudcasts().await.unwrap_err();
        assert!(matches!(err, MixcloudError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_cloudcasts_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "data": [] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = MixcloudClient::new(&test_config(&server.uri())).unwrap();
        let err = client.cloudcasts().await.unwrap_err();
        assert!(matches!(err, MixcloudError::Timeout), "got {err:?}");
    }

    #[tokio::test]
    async fn test_find_by_slug_takes_first_match() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [show("a", "First A"), show("b", "B"), show("a", "Second A")]
            })))
            .mount(&server)
            .await;

        let client = MixcloudClient::new(&test_config(&server.uri())).unwrap();
        let found = client.find_by_slug("a").await.unwrap().unwrap();
        assert_eq!(found.name, "First A");
        assert!(client.find_by_slug("z").await.unwrap().is_none());
    }
}
