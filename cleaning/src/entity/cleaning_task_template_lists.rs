//! `SeaORM` Entity for cleaning_task_template_lists table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cleaning_task_template_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::template_list_templates::Entity")]
    TemplateListTemplates,
}

impl Related<super::template_list_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TemplateListTemplates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
