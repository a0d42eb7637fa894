//! `SeaORM` Entity for cleaning_tasks table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cleaning_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub completed: bool,
    pub cleaning_task_list_id: i32,
    pub area_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cleaning_task_lists::Entity",
        from = "Column::CleaningTaskListId",
        to = "super::cleaning_task_lists::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CleaningTaskLists,
    #[sea_orm(
        belongs_to = "super::areas::Entity",
        from = "Column::AreaId",
        to = "super::areas::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Areas,
}

impl Related<super::cleaning_task_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CleaningTaskLists.def()
    }
}

impl Related<super::areas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Areas.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
