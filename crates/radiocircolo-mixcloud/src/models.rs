use serde::Deserialize;

/// One page of `GET /{username}/cloudcasts/`.
#[derive(Debug, Clone, Deserialize)]
pub struct CloudcastPage {
    pub data: Vec<Cloudcast>,
}

/// A show as published on Mixcloud.
///
/// Only `slug` is required; a show missing anything else is still listed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cloudcast {
    /// Unique path-like key, e.g. `/radiocircolo/ep-1/`.
    #[serde(default, deserialize_with = "nullable_string")]
    pub key: String,
    /// Public page of the show, used by the client as its audio source.
    #[serde(default, deserialize_with = "nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub pictures: Pictures,
}

/// Artwork URLs. Mixcloud sends more sizes; only the two the client renders are kept.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pictures {
    #[serde(rename = "1024wx1024h")]
    pub large: Option<String>,
    pub extra_large: Option<String>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
