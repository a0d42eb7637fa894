use sea_orm::{
    prelude::*,
    sea_query::{Alias, Expr, Order, Query},
    FromQueryResult, JoinType, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    entity::{
        areas as Area, cleaning_task_template_lists as TemplateList,
        cleaning_task_templates as Template, template_list_templates as TemplateListTemplate,
    },
    error::{ApiError, Error},
    schema::{TemplateArea, TemplateInfo, TemplateListInfo},
};

pub async fn create_template_list<C>(db: &C, title: String) -> crate::error::Result<i32>
where
    C: ConnectionTrait,
{
    super::require_non_empty(&title, "title")?;
    let list = TemplateList::ActiveModel {
        title: Set(title),
        ..Default::default()
    };
    let res = TemplateList::Entity::insert(list).exec(db).await?;
    tracing::info!("Created cleaning task template list {}", res.last_insert_id);
    Ok(res.last_insert_id)
}

pub async fn get_template_list<C>(db: &C, list_id: i32) -> crate::error::Result<TemplateListInfo>
where
    C: ConnectionTrait,
{
    let list = TemplateList::Entity::find_by_id(list_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound(format!(
            "Cleaning task template list {list_id}"
        )))?;
    Ok(TemplateListInfo {
        id: list.id,
        title: list.title,
    })
}

pub async fn get_all_template_lists<C>(db: &C) -> crate::error::Result<Vec<TemplateListInfo>>
where
    C: ConnectionTrait,
{
    let lists = TemplateList::Entity::find()
        .order_by_asc(TemplateList::Column::Id)
        .into_model::<TemplateListInfo>()
        .all(db)
        .await?;
    Ok(lists)
}

/// Links an existing template to a list. Duplicate links are allowed.
pub async fn add_existing_template<C>(
    db: &C,
    list_id: i32,
    template_id: i32,
) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    let link = TemplateListTemplate::ActiveModel {
        template_list_id: Set(list_id),
        template_id: Set(template_id),
        ..Default::default()
    };
    TemplateListTemplate::Entity::insert(link).exec(db).await?;
    Ok(())
}

/// Creates a template (and its area when it is new) and links it to the list,
/// returning the id of the new template.
pub async fn create_template<C>(
    db: &C,
    list_id: i32,
    description: String,
    area: TemplateArea,
) -> crate::error::Result<i32>
where
    C: TransactionTrait,
{
    super::require_non_empty(&description, "description")?;
    if let TemplateArea::New(ref area_description) = area {
        super::require_non_empty(area_description, "area description")?;
    }
    let template_id = db
        .transaction::<_, i32, Error>(|txn| {
            Box::pin(async move {
                let area_id = match area {
                    TemplateArea::Existing(area_id) => {
                        if !super::area::area_exists(txn, area_id).await? {
                            return Err(ApiError::NotFound(format!("Area {area_id}")).into());
                        }
                        area_id
                    }
                    TemplateArea::New(area_description) => {
                        super::area::create_area(txn, area_description).await?
                    }
                };
                let template_id =
                    super::template::create_template(txn, description, area_id).await?;
                add_existing_template(txn, list_id, template_id).await?;
                Ok(template_id)
            })
        })
        .await?;
    tracing::info!(
        "Created cleaning task template {} in template list {}",
        template_id,
        list_id
    );
    Ok(template_id)
}

pub async fn remove_template<C>(
    db: &C,
    list_id: i32,
    template_id: i32,
) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    let res = TemplateListTemplate::Entity::delete_many()
        .filter(TemplateListTemplate::Column::TemplateListId.eq(list_id))
        .filter(TemplateListTemplate::Column::TemplateId.eq(template_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        Err(ApiError::NotFound(format!(
            "Cleaning task template {template_id} in template list {list_id}"
        ))
        .into())
    } else {
        Ok(())
    }
}

/// Deletes the list. Its links go with it, the templates themselves stay.
pub async fn delete_template_list<C>(db: &C, list_id: i32) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    let res = TemplateList::Entity::delete_by_id(list_id).exec(db).await?;
    if res.rows_affected == 0 {
        Err(ApiError::NotFound(format!("Cleaning task template list {list_id}")).into())
    } else {
        tracing::info!("Deleted cleaning task template list {}", list_id);
        Ok(())
    }
}

/// Template ids linked to the list in the order they were added.
///
/// An empty list is reported as not found.
pub async fn get_cleaning_task_template_ids<C>(
    db: &C,
    list_id: i32,
) -> crate::error::Result<Vec<i32>>
where
    C: ConnectionTrait,
{
    let template_ids: Vec<i32> = TemplateListTemplate::Entity::find()
        .select_only()
        .column(TemplateListTemplate::Column::TemplateId)
        .filter(TemplateListTemplate::Column::TemplateListId.eq(list_id))
        .order_by_asc(TemplateListTemplate::Column::Id)
        .into_tuple()
        .all(db)
        .await?;
    if template_ids.is_empty() {
        Err(ApiError::NotFound(format!(
            "Cleaning task templates of template list {list_id}"
        ))
        .into())
    } else {
        Ok(template_ids)
    }
}

/// Templates of a list with their area descriptions, in link order.
pub async fn get_templates<C>(db: &C, list_id: i32) -> crate::error::Result<Vec<TemplateInfo>>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let stmt = Query::select()
        .column((Template::Entity, Template::Column::Id))
        .column((Template::Entity, Template::Column::Description))
        .column((Template::Entity, Template::Column::AreaId))
        .expr_as(
            Expr::col((Area::Entity, Area::Column::Description)),
            Alias::new("area_description"),
        )
        .from(TemplateListTemplate::Entity)
        .join(
            JoinType::InnerJoin,
            Template::Entity,
            Expr::col((
                TemplateListTemplate::Entity,
                TemplateListTemplate::Column::TemplateId,
            ))
            .eq(Expr::col((Template::Entity, Template::Column::Id))),
        )
        .join(
            JoinType::InnerJoin,
            Area::Entity,
            Expr::col((Template::Entity, Template::Column::AreaId))
                .eq(Expr::col((Area::Entity, Area::Column::Id))),
        )
        .and_where(
            Expr::col((
                TemplateListTemplate::Entity,
                TemplateListTemplate::Column::TemplateListId,
            ))
            .eq(list_id),
        )
        .order_by(
            (TemplateListTemplate::Entity, TemplateListTemplate::Column::Id),
            Order::Asc,
        )
        .to_owned();
    let templates = TemplateInfo::find_by_statement(builder.build(&stmt))
        .all(db)
        .await?;
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{Error, ErrorKind},
        service::{area, template},
        testing::setup_db,
    };

    #[tokio::test]
    async fn test_create_template_with_new_area() {
        let db = setup_db().await;
        let list_id = create_template_list(&db, "Pool hall".to_string())
            .await
            .unwrap();
        let template_id = create_template(
            &db,
            list_id,
            "Skim pool surface".to_string(),
            TemplateArea::New("Main pool".to_string()),
        )
        .await
        .unwrap();

        let templates = get_templates(&db, list_id).await.unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, template_id);
        assert_eq!(templates[0].description, "Skim pool surface");
        assert_eq!(templates[0].area_description, "Main pool");
        assert_eq!(area::get_all_areas(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_template_with_existing_area() {
        let db = setup_db().await;
        let area_id = area::create_area(&db, "Sauna".to_string()).await.unwrap();
        let list_id = create_template_list(&db, "Spa".to_string()).await.unwrap();
        let template_id = create_template(
            &db,
            list_id,
            "Wipe benches".to_string(),
            TemplateArea::Existing(area_id),
        )
        .await
        .unwrap();
        assert_eq!(template::get_area(&db, template_id).await.unwrap(), area_id);
        assert_eq!(
            get_cleaning_task_template_ids(&db, list_id).await.unwrap(),
            vec![template_id]
        );
        // No extra area was created
        assert_eq!(area::get_all_areas(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_template_with_missing_area_rolls_back() {
        let db = setup_db().await;
        let list_id = create_template_list(&db, "Spa".to_string()).await.unwrap();
        let err = create_template(
            &db,
            list_id,
            "Wipe benches".to_string(),
            TemplateArea::Existing(77),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(template::get_all_templates(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_template_validates_before_io() {
        let db = setup_db().await;
        let err = create_template(
            &db,
            1,
            "Wipe benches".to_string(),
            TemplateArea::New(" ".to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = create_template(&db, 1, String::new(), TemplateArea::Existing(1))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(area::get_all_areas(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_template_ids_empty_is_not_found() {
        let db = setup_db().await;
        let list_id = create_template_list(&db, "Empty".to_string()).await.unwrap();
        let err = get_cleaning_task_template_ids(&db, list_id)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ApiError(ApiError::NotFound(_))));
        // Viewing the templates of an empty list is fine
        assert!(get_templates(&db, list_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_template_ids_keep_insertion_order_and_duplicates() {
        let db = setup_db().await;
        let area_id = area::create_area(&db, "Gym".to_string()).await.unwrap();
        let first = template::create_template(&db, "Wipe mats".to_string(), area_id)
            .await
            .unwrap();
        let second = template::create_template(&db, "Empty bins".to_string(), area_id)
            .await
            .unwrap();
        let list_id = create_template_list(&db, "Gym".to_string()).await.unwrap();
        add_existing_template(&db, list_id, second).await.unwrap();
        add_existing_template(&db, list_id, first).await.unwrap();
        add_existing_template(&db, list_id, second).await.unwrap();
        assert_eq!(
            get_cleaning_task_template_ids(&db, list_id).await.unwrap(),
            vec![second, first, second]
        );
    }

    #[tokio::test]
    async fn test_remove_template() {
        let db = setup_db().await;
        let list_id = create_template_list(&db, "Reception".to_string())
            .await
            .unwrap();
        let template_id = create_template(
            &db,
            list_id,
            "Polish desk".to_string(),
            TemplateArea::New("Reception".to_string()),
        )
        .await
        .unwrap();
        remove_template(&db, list_id, template_id).await.unwrap();
        assert_eq!(
            remove_template(&db, list_id, template_id)
                .await
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
        // The template itself is kept
        assert!(template::template_exists(&db, template_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_template_list_keeps_templates() {
        let db = setup_db().await;
        let list_id = create_template_list(&db, "Cafe".to_string()).await.unwrap();
        let template_id = create_template(
            &db,
            list_id,
            "Clean tables".to_string(),
            TemplateArea::New("Cafe".to_string()),
        )
        .await
        .unwrap();
        delete_template_list(&db, list_id).await.unwrap();

        assert_eq!(
            get_template_list(&db, list_id).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            delete_template_list(&db, list_id).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert!(template::template_exists(&db, template_id).await.unwrap());
        let links = TemplateListTemplate::Entity::find().all(&db).await.unwrap();
        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_create_template_list_requires_title() {
        let db = setup_db().await;
        assert_eq!(
            create_template_list(&db, String::new())
                .await
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidArgument
        );
        assert!(get_all_template_lists(&db).await.unwrap().is_empty());
    }
}
