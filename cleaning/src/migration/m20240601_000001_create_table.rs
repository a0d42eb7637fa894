use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Areas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Areas::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Areas::Description).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CleaningTaskTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CleaningTaskTemplates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CleaningTaskTemplates::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CleaningTaskTemplates::AreaId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-cleaning_task_templates-area_id")
                            .from(CleaningTaskTemplates::Table, CleaningTaskTemplates::AreaId)
                            .to(Areas::Table, Areas::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CleaningTaskTemplateLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CleaningTaskTemplateLists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CleaningTaskTemplateLists::Title)
                            .string_len(50)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TemplateListTemplates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TemplateListTemplates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TemplateListTemplates::TemplateListId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TemplateListTemplates::TemplateId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-template_list_templates-template_list_id")
                            .from(
                                TemplateListTemplates::Table,
                                TemplateListTemplates::TemplateListId,
                            )
                            .to(
                                CleaningTaskTemplateLists::Table,
                                CleaningTaskTemplateLists::Id,
                            )
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-template_list_templates-template_id")
                            .from(
                                TemplateListTemplates::Table,
                                TemplateListTemplates::TemplateId,
                            )
                            .to(CleaningTaskTemplates::Table, CleaningTaskTemplates::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_template_list_templates-template_list_id")
                    .table(TemplateListTemplates::Table)
                    .col(TemplateListTemplates::TemplateListId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_template_list_templates-template_id")
                    .table(TemplateListTemplates::Table)
                    .col(TemplateListTemplates::TemplateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CleaningTaskLists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CleaningTaskLists::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CleaningTaskLists::Date).date().not_null())
                    .col(ColumnDef::new(CleaningTaskLists::ManagerSignature).text())
                    .col(ColumnDef::new(CleaningTaskLists::StaffMemberSignature).text())
                    .col(ColumnDef::new(CleaningTaskLists::StaffMemberId).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CleaningTasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CleaningTasks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CleaningTasks::Description).text().not_null())
                    .col(
                        ColumnDef::new(CleaningTasks::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CleaningTasks::CleaningTaskListId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CleaningTasks::AreaId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-cleaning_tasks-cleaning_task_list_id")
                            .from(CleaningTasks::Table, CleaningTasks::CleaningTaskListId)
                            .to(CleaningTaskLists::Table, CleaningTaskLists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-cleaning_tasks-area_id")
                            .from(CleaningTasks::Table, CleaningTasks::AreaId)
                            .to(Areas::Table, Areas::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cleaning_tasks-cleaning_task_list_id")
                    .table(CleaningTasks::Table)
                    .col(CleaningTasks::CleaningTaskListId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CleaningTasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CleaningTaskLists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TemplateListTemplates::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CleaningTaskTemplateLists::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CleaningTaskTemplates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Areas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Areas {
    Table,
    Id,
    Description,
}

#[derive(DeriveIden)]
enum CleaningTaskTemplates {
    Table,
    Id,
    Description,
    AreaId,
}

#[derive(DeriveIden)]
enum CleaningTaskTemplateLists {
    Table,
    Id,
    Title,
}

#[derive(DeriveIden)]
enum TemplateListTemplates {
    Table,
    Id,
    TemplateListId,
    TemplateId,
}

#[derive(DeriveIden)]
enum CleaningTaskLists {
    Table,
    Id,
    Date,
    ManagerSignature,
    StaffMemberSignature,
    StaffMemberId,
}

#[derive(DeriveIden)]
enum CleaningTasks {
    Table,
    Id,
    Description,
    Completed,
    CleaningTaskListId,
    AreaId,
}
