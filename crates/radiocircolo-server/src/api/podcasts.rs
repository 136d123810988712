use axum::{
    extract::{Path, State},
    Json,
};
use radiocircolo_db::entities::podcast;
use radiocircolo_db::AppState;
use radiocircolo_mixcloud::Cloudcast;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ApiError;

/// A show as returned to the client: Mixcloud fields with curator fields laid over them.
pub type CombinedPodcast = Map<String, Value>;

#[derive(Debug, Serialize)]
pub struct Picture {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_large: Option<String>,
}

/// Listing entry derived from a cloudcast.
#[derive(Debug, Serialize)]
pub struct PodcastSummary {
    pub name: String,
    pub picture: Picture,
    pub audio: String,
    pub id: String,
    pub slug: String,
}

impl From<Cloudcast> for PodcastSummary {
    fn from(c: Cloudcast) -> Self {
        Self {
            name: c.name,
            picture: Picture {
                normal: c.pictures.large,
                extra_large: c.pictures.extra_large,
            },
            audio: c.url,
            id: c.key,
            slug: c.slug,
        }
    }
}

/// Detail view derived from a cloudcast. Carries no `id`/`slug` of its own.
#[derive(Debug, Serialize)]
pub struct PodcastDetail {
    pub name: String,
    pub picture: Picture,
    pub audio: String,
}

impl From<Cloudcast> for PodcastDetail {
    fn from(c: Cloudcast) -> Self {
        Self {
            name: c.name,
            picture: Picture {
                normal: c.pictures.large,
                extra_large: c.pictures.extra_large,
            },
            audio: c.url,
        }
    }
}

/// Serialize `base` and lay the record's present fields over it.
/// A missing record leaves `base` untouched.
fn overlay<T: Serialize>(
    base: &T,
    record: Option<&podcast::Model>,
) -> Result<CombinedPodcast, serde_json::Error> {
    let mut fields = match serde_json::to_value(base)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if let Some(record) = record {
        fields.extend(record.supplement_fields());
    }
    Ok(fields)
}

/// Join the Mixcloud listing with curator records, keeping listing order.
///
/// When several records share a slug the first one (lowest id) wins.
pub fn combine_listing(
    shows: Vec<Cloudcast>,
    records: &[podcast::Model],
) -> Result<Vec<CombinedPodcast>, serde_json::Error> {
    let mut by_slug: HashMap<&str, &podcast::Model> = HashMap::with_capacity(records.len());
    for record in records {
        by_slug.entry(record.slug.as_str()).or_insert(record);
    }

    shows
        .into_iter()
        .map(|show| {
            let record = by_slug.get(show.slug.as_str()).copied();
            overlay(&PodcastSummary::from(show), record)
        })
        .collect()
}

pub fn combine_detail(
    show: Cloudcast,
    record: Option<&podcast::Model>,
) -> Result<CombinedPodcast, serde_json::Error> {
    overlay(&PodcastDetail::from(show), record)
}

/// GET / — every show on the Mixcloud account, enriched with curator data
pub async fn list_podcasts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CombinedPodcast>>, ApiError> {
    let shows = state.mixcloud.cloudcasts().await?;

    let records = podcast::Entity::find()
        .order_by_asc(podcast::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(combine_listing(shows, &records)?))
}

/// GET /{slug} — a single show
pub async fn get_podcast(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Json<CombinedPodcast>, ApiError> {
    tracing::debug!(slug = %slug, "podcast lookup");

    let show = state
        .mixcloud
        .find_by_slug(&slug)
        .await?
        .ok_or(ApiError::PodcastNotFound)?;

    let record = podcast::Entity::find()
        .filter(podcast::Column::Slug.eq(slug.as_str()))
        .order_by_asc(podcast::Column::Id)
        .one(&state.db)
        .await?;

    Ok(Json(combine_detail(show, record.as_ref())?))
}
