//! `SeaORM` Entity for template_list_templates table
//!
//! Membership of templates in template lists. The same pair may appear more than once,
//! and the row id gives the order in which templates were added to a list.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "template_list_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub template_list_id: i32,
    pub template_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cleaning_task_template_lists::Entity",
        from = "Column::TemplateListId",
        to = "super::cleaning_task_template_lists::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    TemplateLists,
    #[sea_orm(
        belongs_to = "super::cleaning_task_templates::Entity",
        from = "Column::TemplateId",
        to = "super::cleaning_task_templates::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Templates,
}

impl Related<super::cleaning_task_template_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TemplateLists.def()
    }
}

impl Related<super::cleaning_task_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Templates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
