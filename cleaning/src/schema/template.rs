use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::{entity::areas as Area, error::ApiError};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTemplateListReq {
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromQueryResult)]
pub struct TemplateListInfo {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromQueryResult)]
pub struct TemplateInfo {
    pub id: i32,
    pub description: String,
    pub area_id: i32,
    pub area_description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TemplateListView {
    pub id: i32,
    pub title: String,
    pub templates: Vec<TemplateInfo>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AreaInfo {
    pub id: i32,
    pub description: String,
}

impl From<Area::Model> for AreaInfo {
    fn from(area: Area::Model) -> Self {
        Self {
            id: area.id,
            description: area.description,
        }
    }
}

/// Raw body of a request adding a template to a template list.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TemplateEntryReq {
    #[serde(default)]
    pub template_id: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub area_id: Option<i32>,
    #[serde(default)]
    pub area_description: Option<String>,
}

/// The area a new template is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateArea {
    Existing(i32),
    New(String),
}

/// What to put into a template list: a template that already exists, or a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateEntry {
    Existing {
        template_id: i32,
    },
    New {
        description: String,
        area: TemplateArea,
    },
}

impl TryFrom<TemplateEntryReq> for TemplateEntry {
    type Error = ApiError;

    fn try_from(req: TemplateEntryReq) -> Result<Self, Self::Error> {
        match req {
            TemplateEntryReq {
                template_id: Some(template_id),
                description: None,
                area_id: None,
                area_description: None,
            } => Ok(TemplateEntry::Existing { template_id }),
            TemplateEntryReq {
                template_id: None,
                description: Some(description),
                area_id: Some(area_id),
                area_description: None,
            } => Ok(TemplateEntry::New {
                description,
                area: TemplateArea::Existing(area_id),
            }),
            TemplateEntryReq {
                template_id: None,
                description: Some(description),
                area_id: None,
                area_description: Some(area_description),
            } => Ok(TemplateEntry::New {
                description,
                area: TemplateArea::New(area_description),
            }),
            _ => Err(ApiError::InvalidRequest(
                "expected either template_id, description with area_id, or description with area_description".to_string(),
            )),
        }
    }
}
