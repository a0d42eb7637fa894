//! `SeaORM` Entity for cleaning_task_templates table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "cleaning_task_templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub area_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::areas::Entity",
        from = "Column::AreaId",
        to = "super::areas::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Areas,
    #[sea_orm(has_many = "super::template_list_templates::Entity")]
    TemplateListTemplates,
}

impl Related<super::areas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Areas.def()
    }
}

impl Related<super::template_list_templates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TemplateListTemplates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
