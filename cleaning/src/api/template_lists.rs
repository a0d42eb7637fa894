use axum::{
    extract::{Path, State},
    middleware,
    routing::{delete, get, post},
    Json, Router,
};

use crate::{
    config::InfraPool,
    error::ApiResult,
    schema::*,
    service::{self, auth::manager_auth_middleware, parse_id},
};

use super::ApiJson;

pub fn template_lists_router(st: InfraPool) -> Router<InfraPool> {
    Router::new()
        .route(
            "/template-lists",
            post(create_template_list).get(get_all_template_lists),
        )
        .route(
            "/template-lists/{id}",
            get(view_template_list).delete(delete_template_list),
        )
        .route("/template-lists/{id}/templates", post(add_template))
        .route(
            "/template-lists/{id}/templates/{template_id}",
            delete(remove_template),
        )
        .route_layer(middleware::from_fn_with_state(
            st.clone(),
            manager_auth_middleware,
        ))
        .with_state(st)
}

pub async fn create_template_list(
    State(pool): State<InfraPool>,
    ApiJson(req): ApiJson<CreateTemplateListReq>,
) -> ApiResult<Json<CreatedResp>> {
    let id = service::cleaning::create_template_list(&pool, req.title).await?;
    Ok(Json(CreatedResp { id }))
}

pub async fn get_all_template_lists(
    State(pool): State<InfraPool>,
) -> ApiResult<Json<Vec<TemplateListInfo>>> {
    Ok(Json(
        service::cleaning::get_all_template_lists(&pool).await?,
    ))
}

pub async fn view_template_list(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
) -> ApiResult<Json<TemplateListView>> {
    let id = parse_id(&id, "template list id")?;
    Ok(Json(service::cleaning::view_template_list(&pool, id).await?))
}

pub async fn delete_template_list(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id, "template list id")?;
    service::cleaning::delete_template_list(&pool, id).await?;
    Ok(())
}

pub async fn add_template(
    State(pool): State<InfraPool>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<TemplateEntryReq>,
) -> ApiResult<Json<CreatedResp>> {
    let id = parse_id(&id, "template list id")?;
    let entry = TemplateEntry::try_from(req)?;
    let template_id = service::cleaning::add_or_create_template_in_list(&pool, id, entry).await?;
    Ok(Json(CreatedResp { id: template_id }))
}

pub async fn remove_template(
    State(pool): State<InfraPool>,
    Path((id, template_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let id = parse_id(&id, "template list id")?;
    let template_id = parse_id(&template_id, "template id")?;
    service::cleaning::remove_template_from_list(&pool, id, template_id).await?;
    Ok(())
}
