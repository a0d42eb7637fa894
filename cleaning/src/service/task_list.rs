use sea_orm::{
    prelude::*, sea_query::Expr, JoinType, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    UtcOffset,
};

use crate::{
    entity::{
        areas as Area, cleaning_task_lists as TaskList,
        cleaning_task_template_lists as TemplateList, cleaning_tasks as Task,
    },
    error::{ApiError, Error},
    schema::{CleaningTaskInfo, NewCleaningTask, TaskListInfo},
};

/// Which of the two independent sign-off slots of a task list to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureSlot {
    Manager,
    StaffMember,
}

impl SignatureSlot {
    fn column(&self) -> TaskList::Column {
        match self {
            SignatureSlot::Manager => TaskList::Column::ManagerSignature,
            SignatureSlot::StaffMember => TaskList::Column::StaffMemberSignature,
        }
    }
}

fn parse_list_date(raw: &str) -> Result<Date, ApiError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(raw.trim(), &format)
        .or_else(|_| OffsetDateTime::parse(raw.trim(), &Rfc3339).map(|dt| dt.date()))
        .map_err(|_| ApiError::InvalidRequest(format!("date {raw} is not a valid date")))
}

/// The calendar date at the centre, given its offset from UTC.
pub fn today_at(offset: UtcOffset) -> Date {
    OffsetDateTime::now_utc().to_offset(offset).date()
}

fn validate_list_date(raw: &str, today: Date) -> Result<Date, ApiError> {
    let date = parse_list_date(raw)?;
    if date < today {
        Err(ApiError::InvalidRequest(
            "date cannot be in the past".to_string(),
        ))
    } else {
        Ok(date)
    }
}

/// Creates a task list for `date` holding one task per template currently linked to the
/// template list.
pub async fn create_task_list<C>(
    db: &C,
    template_list_id: i32,
    date: &str,
    staff_member_id: Option<i32>,
    today: Date,
) -> crate::error::Result<i32>
where
    C: TransactionTrait,
{
    let date = validate_list_date(date, today)?;
    let (list_id, task_count) = db
        .transaction::<_, (i32, usize), Error>(|txn| {
            Box::pin(async move {
                if TemplateList::Entity::find_by_id(template_list_id)
                    .one(txn)
                    .await?
                    .is_none()
                {
                    return Err(ApiError::NotFound(format!(
                        "Cleaning task template list {template_list_id}"
                    ))
                    .into());
                }
                let list = TaskList::ActiveModel {
                    date: Set(date),
                    manager_signature: Set(None),
                    staff_member_signature: Set(None),
                    staff_member_id: Set(staff_member_id),
                    ..Default::default()
                };
                let list_id = TaskList::Entity::insert(list).exec(txn).await?.last_insert_id;
                let template_ids = match super::template_list::get_cleaning_task_template_ids(
                    txn,
                    template_list_id,
                )
                .await
                {
                    Ok(template_ids) => template_ids,
                    Err(Error::ApiError(ApiError::NotFound(_))) => Vec::new(),
                    Err(e) => return Err(e),
                };
                let task_count = template_ids.len();
                for template_id in template_ids {
                    let description = super::template::get_description(txn, template_id).await?;
                    let area_id = super::template::get_area(txn, template_id).await?;
                    insert_task(txn, list_id, description, area_id).await?;
                }
                Ok((list_id, task_count))
            })
        })
        .await?;
    tracing::info!(
        "Created cleaning task list {} from template list {} with {} tasks",
        list_id,
        template_list_id,
        task_count
    );
    Ok(list_id)
}

async fn insert_task<C>(
    db: &C,
    list_id: i32,
    description: String,
    area_id: i32,
) -> crate::error::Result<i32>
where
    C: ConnectionTrait,
{
    let task = Task::ActiveModel {
        description: Set(description),
        completed: Set(false),
        cleaning_task_list_id: Set(list_id),
        area_id: Set(area_id),
        ..Default::default()
    };
    Ok(Task::Entity::insert(task).exec(db).await?.last_insert_id)
}

/// Adds a single task to an existing list.
pub async fn create_task<C>(
    db: &C,
    list_id: i32,
    task: NewCleaningTask,
) -> crate::error::Result<i32>
where
    C: TransactionTrait,
{
    match &task {
        NewCleaningTask::FromTemplate { .. } => {}
        NewCleaningTask::WithExistingArea { description, .. } => {
            super::require_non_empty(description, "description")?;
        }
        NewCleaningTask::WithNewArea {
            description,
            area_description,
        } => {
            super::require_non_empty(description, "description")?;
            super::require_non_empty(area_description, "area description")?;
        }
    }
    let task_id = db
        .transaction::<_, i32, Error>(|txn| {
            Box::pin(async move {
                if TaskList::Entity::find_by_id(list_id).one(txn).await?.is_none() {
                    return Err(ApiError::NotFound(format!("Cleaning task list {list_id}")).into());
                }
                let (description, area_id) = match task {
                    NewCleaningTask::FromTemplate { template_id } => (
                        super::template::get_description(txn, template_id).await?,
                        super::template::get_area(txn, template_id).await?,
                    ),
                    NewCleaningTask::WithExistingArea {
                        description,
                        area_id,
                    } => {
                        if !super::area::area_exists(txn, area_id).await? {
                            return Err(ApiError::NotFound(format!("Area {area_id}")).into());
                        }
                        (description, area_id)
                    }
                    NewCleaningTask::WithNewArea {
                        description,
                        area_description,
                    } => {
                        let area_id = super::area::create_area(txn, area_description).await?;
                        (description, area_id)
                    }
                };
                insert_task(txn, list_id, description, area_id).await
            })
        })
        .await?;
    tracing::debug!("Added cleaning task {} to list {}", task_id, list_id);
    Ok(task_id)
}

async fn set_completed<C>(db: &C, task_id: i32, completed: bool) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    let current: Option<bool> = Task::Entity::find_by_id(task_id)
        .select_only()
        .column(Task::Column::Completed)
        .into_tuple()
        .one(db)
        .await?;
    match current {
        None => Err(ApiError::NotFound(format!("Cleaning task {task_id}")).into()),
        Some(true) if completed => Err(ApiError::InvalidState(format!(
            "Cleaning task {task_id} is already completed"
        ))
        .into()),
        Some(false) if !completed => Err(ApiError::InvalidState(format!(
            "Cleaning task {task_id} is already incomplete"
        ))
        .into()),
        Some(_) => {
            let task = Task::ActiveModel {
                id: Set(task_id),
                completed: Set(completed),
                ..Default::default()
            };
            task.update(db).await?;
            Ok(())
        }
    }
}

pub async fn mark_complete<C>(db: &C, task_id: i32) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    set_completed(db, task_id, true).await
}

pub async fn mark_incomplete<C>(db: &C, task_id: i32) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    set_completed(db, task_id, false).await
}

pub async fn set_signature<C>(
    db: &C,
    list_id: i32,
    slot: SignatureSlot,
    signature: String,
) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    super::require_non_empty(&signature, "signature")?;
    let res = TaskList::Entity::update_many()
        .col_expr(slot.column(), Expr::value(signature))
        .filter(TaskList::Column::Id.eq(list_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        Err(ApiError::NotFound(format!("Cleaning task list {list_id}")).into())
    } else {
        tracing::info!("{:?} signed cleaning task list {}", slot, list_id);
        Ok(())
    }
}

pub async fn set_manager_signature<C>(
    db: &C,
    list_id: i32,
    signature: String,
) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    set_signature(db, list_id, SignatureSlot::Manager, signature).await
}

pub async fn set_staff_member_signature<C>(
    db: &C,
    list_id: i32,
    signature: String,
) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    set_signature(db, list_id, SignatureSlot::StaffMember, signature).await
}

/// Assigns a staff member from the external directory. The id is not cross-checked.
pub async fn assign_staff_member<C>(
    db: &C,
    list_id: i32,
    staff_member_id: i32,
) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    let res = TaskList::Entity::update_many()
        .col_expr(TaskList::Column::StaffMemberId, Expr::value(staff_member_id))
        .filter(TaskList::Column::Id.eq(list_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        Err(ApiError::NotFound(format!("Cleaning task list {list_id}")).into())
    } else {
        Ok(())
    }
}

pub async fn get_view<C>(db: &C, list_id: i32) -> crate::error::Result<TaskListInfo>
where
    C: ConnectionTrait,
{
    let list = TaskList::Entity::find_by_id(list_id)
        .one(db)
        .await?
        .ok_or(ApiError::NotFound(format!("Cleaning task list {list_id}")))?;
    Ok(list.into())
}

pub async fn get_all_task_lists<C>(db: &C) -> crate::error::Result<Vec<TaskListInfo>>
where
    C: ConnectionTrait,
{
    let lists = TaskList::Entity::find()
        .order_by_asc(TaskList::Column::Date)
        .order_by_asc(TaskList::Column::Id)
        .all(db)
        .await?;
    Ok(lists.into_iter().map(TaskListInfo::from).collect())
}

/// Tasks of a list with their area descriptions, ordered by task id.
pub async fn get_cleaning_tasks<C>(
    db: &C,
    list_id: i32,
) -> crate::error::Result<Vec<CleaningTaskInfo>>
where
    C: ConnectionTrait,
{
    if TaskList::Entity::find_by_id(list_id).one(db).await?.is_none() {
        return Err(ApiError::NotFound(format!("Cleaning task list {list_id}")).into());
    }
    let tasks = Task::Entity::find()
        .select_only()
        .column(Task::Column::Id)
        .column(Task::Column::Description)
        .column(Task::Column::Completed)
        .column(Task::Column::CleaningTaskListId)
        .column(Task::Column::AreaId)
        .column_as(Area::Column::Description, "area_description")
        .join(JoinType::InnerJoin, Task::Relation::Areas.def())
        .filter(Task::Column::CleaningTaskListId.eq(list_id))
        .order_by_asc(Task::Column::Id)
        .into_model::<CleaningTaskInfo>()
        .all(db)
        .await?;
    Ok(tasks)
}

/// The list a task belongs to.
pub async fn get_task_list_id<C>(db: &C, task_id: i32) -> crate::error::Result<i32>
where
    C: ConnectionTrait,
{
    let list_id: Option<i32> = Task::Entity::find_by_id(task_id)
        .select_only()
        .column(Task::Column::CleaningTaskListId)
        .into_tuple()
        .one(db)
        .await?;
    Ok(list_id.ok_or(ApiError::NotFound(format!("Cleaning task {task_id}")))?)
}

pub async fn remove_task<C>(db: &C, list_id: i32, task_id: i32) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    let res = Task::Entity::delete_many()
        .filter(Task::Column::Id.eq(task_id))
        .filter(Task::Column::CleaningTaskListId.eq(list_id))
        .exec(db)
        .await?;
    if res.rows_affected == 0 {
        Err(ApiError::NotFound(format!(
            "Cleaning task {task_id} in list {list_id}"
        ))
        .into())
    } else {
        Ok(())
    }
}

/// Deletes the list together with its tasks.
pub async fn delete_task_list<C>(db: &C, list_id: i32) -> crate::error::Result<()>
where
    C: ConnectionTrait,
{
    let res = TaskList::Entity::delete_by_id(list_id).exec(db).await?;
    if res.rows_affected == 0 {
        Err(ApiError::NotFound(format!("Cleaning task list {list_id}")).into())
    } else {
        tracing::info!("Deleted cleaning task list {}", list_id);
        Ok(())
    }
}
