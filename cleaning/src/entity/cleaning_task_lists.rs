//! `SeaORM` Entity for cleaning_task_lists table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cleaning_task_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: TimeDate,
    pub manager_signature: Option<String>,
    pub staff_member_signature: Option<String>,
    /// Identifier in the external staff directory, not a foreign key.
    pub staff_member_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cleaning_tasks::Entity")]
    CleaningTasks,
}

impl Related<super::cleaning_tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CleaningTasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
