use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::{
    config::InfraPool,
    error::ApiResult,
    schema::*,
    service::{
        self,
        auth::{manager_auth_middleware, user_auth_middleware, AuthUser},
        parse_id,
    },
};

use super::ApiJson;

/// Routes open to any member of staff.
pub fn task_lists_router(st: InfraPool) -> Router<InfraPool> {
    Router::new()
        .route("/task-lists", get(get_all_task_lists))
        .route("/task-lists/{id}", get(view_task_list))
        .route(
            "/task-lists/{id}/tasks/{task_id}/complete",
            post(mark_complete),
        )
        .route(
            "/task-lists/{id}/tasks/{task_id}/incomplete",
            post(mark_incomplete),
        )
        .route(
            "/task-lists/{id}/signatures/staff",
            post(sign_staff_signature),
        )
        .route_layer(middleware::from_fn_with_state(
            st.clone(),
            user_auth_middleware,
        ))
        .with_state(st)
}

/// Routes reserved for managers. The role is checked before any body is read.
pub fn task_lists_manager_router(st: InfraPool) -> Router<InfraPool> {
    Router::new()
        .route("/task-lists", post(create_task_list))
        .route("/task-lists/{id}", delete(delete_task_list))
        .route("/task-lists/{id}/tasks", post(add_task))
        .route("/task-lists/{id}/tasks/{task_id}", delete(remove_task))
        .route(
            "/task-lists/{id}/signatures/manager",
            post(sign_manager_signature),
        )
        .route("/task-lists/{id}/staff-member", put(assign_staff_member))
        .route_layer(middleware::from_fn_with_state(
            st.clone(),
            manager_auth_middleware,
        ))
        .with_state(st)
}

fn parse_task_path(id: &str, task_id: &str) -> ApiResult<(i32, i32)> {
    Ok((
        parse_id(id, "task list id")?,
        parse_id(task_id, "task id")?,
    ))
}

pub async fn create_task_list(
    State(pool): State<InfraPool>,
    ApiJson(req): ApiJson<CreateTaskListReq>,
) -> ApiResult<Json<CreatedResp>> {
    let id = service::cleaning::create_task_list(
        &pool,
        req.template_list_id,
        &req.date,
        req.staff_member_id,
    )
    .await?;
    Ok(Json(CreatedResp { id }))
}

pub async fn get_all_task_lists(
    State(pool): State<InfraPool>,
) -> ApiResult<Json<Vec<TaskListInfo>>> {
    Ok(Json(service::cleaning::get_all_task_lists(&pool).await?))
}

pub async fn view_task_list(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskListView>> {
    let id = parse_id(&id, "task list id")?;
    Ok(Json(service::cleaning::view_task_list(&pool, id).await?))
}

pub async fn delete_task_list(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id, "task list id")?;
    service::cleaning::delete_task_list(&pool, id).await?;
    Ok(())
}

pub async fn add_task(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AddTaskReq>,
) -> ApiResult<Json<CreatedResp>> {
    let id = parse_id(&id, "task list id")?;
    let task = NewCleaningTask::try_from(req)?;
    let task_id = service::cleaning::add_task_to_list(&pool, id, task).await?;
    Ok(Json(CreatedResp { id: task_id }))
}

pub async fn remove_task(
    State(pool): State<InfraPool>,
    Path((id, task_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let (id, task_id) = parse_task_path(&id, &task_id)?;
    service::cleaning::remove_task_from_list(&pool, id, task_id).await?;
    Ok(())
}

pub async fn mark_complete(
    Extension(u): Extension<AuthUser>,
    State(pool): State<InfraPool>,
    Path((id, task_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let (id, task_id) = parse_task_path(&id, &task_id)?;
    service::cleaning::mark_complete(&pool, id, task_id).await?;
    tracing::debug!("{} completed task {} of list {}", u.sub, task_id, id);
    Ok(())
}

pub async fn mark_incomplete(
    Extension(u): Extension<AuthUser>,
    State(pool): State<InfraPool>,
    Path((id, task_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let (id, task_id) = parse_task_path(&id, &task_id)?;
    service::cleaning::mark_incomplete(&pool, id, task_id).await?;
    tracing::debug!("{} reopened task {} of list {}", u.sub, task_id, id);
    Ok(())
}

pub async fn sign_manager_signature(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<SignatureReq>,
) -> ApiResult<()> {
    let id = parse_id(&id, "task list id")?;
    service::cleaning::sign_manager_signature(&pool, id, req.signature).await?;
    Ok(())
}

pub async fn sign_staff_signature(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<SignatureReq>,
) -> ApiResult<()> {
    let id = parse_id(&id, "task list id")?;
    service::cleaning::sign_staff_signature(&pool, id, req.signature).await?;
    Ok(())
}

pub async fn assign_staff_member(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<AssignStaffMemberReq>,
) -> ApiResult<()> {
    let id = parse_id(&id, "task list id")?;
    service::cleaning::assign_staff_member(&pool, id, req.staff_member_id).await?;
    Ok(())
}
