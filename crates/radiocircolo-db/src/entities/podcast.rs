use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Curator-maintained details for one show, joined to Mixcloud by `slug`.
///
/// Rows are provisioned out of band; this service only reads them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "podcasts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub slug: String,
    pub name: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// Ordered list of member names.
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub members: Option<Json>,
    /// Link labels, parallel to `link`.
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub link_name: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub link: Option<Json>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub track_list: Option<Json>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Stands in for a NULL list column.
static EMPTY_LIST: Json = Json::Array(Vec::new());

/// The fields a record contributes to a combined show, under the names the
/// web client reads. NULL scalars are left out; NULL lists come out as `[]`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplement<'a> {
    pub slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub members: &'a Json,
    pub link_name: &'a Json,
    pub link: &'a Json,
    pub track_list: &'a Json,
}

impl Model {
    pub fn supplement(&self) -> Supplement<'_> {
        Supplement {
            slug: &self.slug,
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            members: self.members.as_ref().unwrap_or(&EMPTY_LIST),
            link_name: self.link_name.as_ref().unwrap_or(&EMPTY_LIST),
            link: self.link.as_ref().unwrap_or(&EMPTY_LIST),
            track_list: self.track_list.as_ref().unwrap_or(&EMPTY_LIST),
        }
    }

    /// The supplement as a JSON object, ready to overlay.
    pub fn supplement_fields(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self.supplement()) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}
