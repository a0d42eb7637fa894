//! Entry points used by the HTTP handlers, one per use case.
//!
//! Each function forwards to the per-entity services with light adaptation of its
//! arguments, and composes the reads that span more than one entity.

use crate::{
    config::InfraPool,
    error::ApiError,
    schema::{
        AreaInfo, NewCleaningTask, StaffMember, TaskListInfo, TaskListView, TemplateEntry,
        TemplateInfo, TemplateListInfo, TemplateListView,
    },
};

use super::{area, staff, task_list, template, template_list};

pub async fn create_template_list(pool: &InfraPool, title: String) -> crate::error::Result<i32> {
    template_list::create_template_list(&pool.db, title).await
}

pub async fn view_template_list(
    pool: &InfraPool,
    list_id: i32,
) -> crate::error::Result<TemplateListView> {
    let list = template_list::get_template_list(&pool.db, list_id).await?;
    let templates = template_list::get_templates(&pool.db, list_id).await?;
    Ok(TemplateListView {
        id: list.id,
        title: list.title,
        templates,
    })
}

/// Adds an existing template to a list, or creates a new one in it. Returns the id of
/// the template that ended up linked.
pub async fn add_or_create_template_in_list(
    pool: &InfraPool,
    list_id: i32,
    entry: TemplateEntry,
) -> crate::error::Result<i32> {
    template_list::get_template_list(&pool.db, list_id).await?;
    match entry {
        TemplateEntry::Existing { template_id } => {
            if !template::template_exists(&pool.db, template_id).await? {
                return Err(
                    ApiError::NotFound(format!("Cleaning task template {template_id}")).into(),
                );
            }
            template_list::add_existing_template(&pool.db, list_id, template_id).await?;
            Ok(template_id)
        }
        TemplateEntry::New { description, area } => {
            template_list::create_template(&pool.db, list_id, description, area).await
        }
    }
}

pub async fn get_all_template_lists(
    pool: &InfraPool,
) -> crate::error::Result<Vec<TemplateListInfo>> {
    template_list::get_all_template_lists(&pool.db).await
}

pub async fn get_all_templates(pool: &InfraPool) -> crate::error::Result<Vec<TemplateInfo>> {
    template::get_all_templates(&pool.db).await
}

pub async fn get_all_areas(pool: &InfraPool) -> crate::error::Result<Vec<AreaInfo>> {
    area::get_all_areas(&pool.db).await
}

pub async fn remove_template_from_list(
    pool: &InfraPool,
    list_id: i32,
    template_id: i32,
) -> crate::error::Result<()> {
    template_list::remove_template(&pool.db, list_id, template_id).await
}

pub async fn delete_template_list(pool: &InfraPool, list_id: i32) -> crate::error::Result<()> {
    template_list::delete_template_list(&pool.db, list_id).await
}

pub async fn create_task_list(
    pool: &InfraPool,
    template_list_id: i32,
    date: &str,
    staff_member_id: Option<i32>,
) -> crate::error::Result<i32> {
    task_list::create_task_list(
        &pool.db,
        template_list_id,
        date,
        staff_member_id,
        task_list::today_at(pool.utc_offset),
    )
    .await
}

pub async fn get_all_task_lists(pool: &InfraPool) -> crate::error::Result<Vec<TaskListInfo>> {
    task_list::get_all_task_lists(&pool.db).await
}

pub async fn view_task_list(pool: &InfraPool, list_id: i32) -> crate::error::Result<TaskListView> {
    let list = task_list::get_view(&pool.db, list_id).await?;
    let tasks = task_list::get_cleaning_tasks(&pool.db, list_id).await?;
    Ok(TaskListView { list, tasks })
}

pub async fn add_task_to_list(
    pool: &InfraPool,
    list_id: i32,
    task: NewCleaningTask,
) -> crate::error::Result<i32> {
    task_list::create_task(&pool.db, list_id, task).await
}

pub async fn remove_task_from_list(
    pool: &InfraPool,
    list_id: i32,
    task_id: i32,
) -> crate::error::Result<()> {
    task_list::remove_task(&pool.db, list_id, task_id).await
}

async fn ensure_task_in_list(
    pool: &InfraPool,
    list_id: i32,
    task_id: i32,
) -> crate::error::Result<()> {
    let owner = task_list::get_task_list_id(&pool.db, task_id).await?;
    if owner != list_id {
        return Err(ApiError::NotFound(format!(
            "Cleaning task {task_id} in list {list_id}"
        ))
        .into());
    }
    Ok(())
}

pub async fn mark_complete(
    pool: &InfraPool,
    list_id: i32,
    task_id: i32,
) -> crate::error::Result<()> {
    ensure_task_in_list(pool, list_id, task_id).await?;
    task_list::mark_complete(&pool.db, task_id).await
}

pub async fn mark_incomplete(
    pool: &InfraPool,
    list_id: i32,
    task_id: i32,
) -> crate::error::Result<()> {
    ensure_task_in_list(pool, list_id, task_id).await?;
    task_list::mark_incomplete(&pool.db, task_id).await
}

pub async fn sign_manager_signature(
    pool: &InfraPool,
    list_id: i32,
    signature: String,
) -> crate::error::Result<()> {
    task_list::set_manager_signature(&pool.db, list_id, signature).await
}

pub async fn sign_staff_signature(
    pool: &InfraPool,
    list_id: i32,
    signature: String,
) -> crate::error::Result<()> {
    task_list::set_staff_member_signature(&pool.db, list_id, signature).await
}

pub async fn delete_task_list(pool: &InfraPool, list_id: i32) -> crate::error::Result<()> {
    task_list::delete_task_list(&pool.db, list_id).await
}

pub async fn assign_staff_member(
    pool: &InfraPool,
    list_id: i32,
    staff_member_id: i32,
) -> crate::error::Result<()> {
    task_list::assign_staff_member(&pool.db, list_id, staff_member_id).await
}

pub async fn list_staff_members(pool: &InfraPool) -> crate::error::Result<Vec<StaffMember>> {
    staff::list_staff_members(&pool.directory).await
}
