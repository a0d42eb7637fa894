//! `SeaORM` Entity for areas table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "areas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cleaning_task_templates::Entity")]
    CleaningTaskTemplates,
    #[sea_orm(has_many = "super::cleaning_tasks::Entity")]
    CleaningTasks,
}

impl Related<super::cleaning_task_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CleaningTaskTemplates.def()
    }
}

impl Related<super::cleaning_tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CleaningTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
