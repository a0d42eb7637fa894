//! Lookups on cleaning task templates.
//!
//! A missing template is reported as an internal failure here rather than as not found,
//! since callers only ever reach these lookups through existing list memberships.

use sea_orm::{prelude::*, JoinType, QueryOrder, QuerySelect, Set};

use crate::{
    entity::{areas as Area, cleaning_task_templates as Template},
    error::Error,
    schema::TemplateInfo,
};

pub async fn get_description<C>(db: &C, template_id: i32) -> crate::error::Result<String>
where
    C: ConnectionTrait,
{
    let description: Option<String> = Template::Entity::find_by_id(template_id)
        .select_only()
        .column(Template::Column::Description)
        .into_tuple()
        .one(db)
        .await?;
    description.ok_or_else(|| {
        Error::Custom(format!(
            "description of cleaning task template {template_id} could not be found"
        ))
    })
}

pub async fn get_area<C>(db: &C, template_id: i32) -> crate::error::Result<i32>
where
    C: ConnectionTrait,
{
    let area_id: Option<i32> = Template::Entity::find_by_id(template_id)
        .select_only()
        .column(Template::Column::AreaId)
        .into_tuple()
        .one(db)
        .await?;
    area_id.ok_or_else(|| {
        Error::Custom(format!(
            "area of cleaning task template {template_id} could not be found"
        ))
    })
}

pub async fn template_exists<C>(db: &C, template_id: i32) -> crate::error::Result<bool>
where
    C: ConnectionTrait,
{
    Ok(Template::Entity::find_by_id(template_id)
        .one(db)
        .await?
        .is_some())
}

pub async fn create_template<C>(
    db: &C,
    description: String,
    area_id: i32,
) -> crate::error::Result<i32>
where
    C: ConnectionTrait,
{
    super::require_non_empty(&description, "description")?;
    let template = Template::ActiveModel {
        description: Set(description),
        area_id: Set(area_id),
        ..Default::default()
    };
    let res = Template::Entity::insert(template).exec(db).await?;
    Ok(res.last_insert_id)
}

pub async fn get_all_templates<C>(db: &C) -> crate::error::Result<Vec<TemplateInfo>>
where
    C: ConnectionTrait,
{
    let templates = Template::Entity::find()
        .select_only()
        .column(Template::Column::Id)
        .column(Template::Column::Description)
        .column(Template::Column::AreaId)
        .column_as(Area::Column::Description, "area_description")
        .join(JoinType::InnerJoin, Template::Relation::Areas.def())
        .order_by_asc(Template::Column::Id)
        .into_model::<TemplateInfo>()
        .all(db)
        .await?;
    Ok(templates)
}
