use sea_orm::{prelude::*, QueryOrder, Set};

use crate::{entity::areas as Area, schema::AreaInfo};

/// Inserts a new area. Descriptions are not deduplicated.
pub async fn create_area<C>(db: &C, description: String) -> crate::error::Result<i32>
where
    C: ConnectionTrait,
{
    super::require_non_empty(&description, "area description")?;
    let area = Area::ActiveModel {
        description: Set(description),
        ..Default::default()
    };
    let res = Area::Entity::insert(area).exec(db).await?;
    tracing::debug!("Created area {}", res.last_insert_id);
    Ok(res.last_insert_id)
}

pub async fn area_exists<C>(db: &C, area_id: i32) -> crate::error::Result<bool>
where
    C: ConnectionTrait,
{
    Ok(Area::Entity::find_by_id(area_id).one(db).await?.is_some())
}

pub async fn get_all_areas<C>(db: &C) -> crate::error::Result<Vec<AreaInfo>>
where
    C: ConnectionTrait,
{
    let areas = Area::Entity::find()
        .order_by_asc(Area::Column::Id)
        .all(db)
        .await?;
    Ok(areas.into_iter().map(AreaInfo::from).collect())
}
