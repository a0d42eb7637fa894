use axum::{extract::State, middleware, routing::get, Json, Router};

use crate::{
    config::InfraPool,
    error::ApiResult,
    schema::*,
    service::{self, auth::manager_auth_middleware},
};

/// Read-only views over every template, area and member of staff.
pub fn catalog_router(st: InfraPool) -> Router<InfraPool> {
    Router::new()
        .route("/templates", get(get_all_templates))
        .route("/areas", get(get_all_areas))
        .route("/staff-members", get(list_staff_members))
        .route_layer(middleware::from_fn_with_state(
            st.clone(),
            manager_auth_middleware,
        ))
        .with_state(st)
}

pub async fn get_all_templates(State(pool): State<InfraPool>) -> ApiResult<Json<Vec<TemplateInfo>>> {
    Ok(Json(service::cleaning::get_all_templates(&pool).await?))
}

pub async fn get_all_areas(State(pool): State<InfraPool>) -> ApiResult<Json<Vec<AreaInfo>>> {
    Ok(Json(service::cleaning::get_all_areas(&pool).await?))
}

pub async fn list_staff_members(
    State(pool): State<InfraPool>,
) -> ApiResult<Json<StaffMembersResp>> {
    let staff_members = service::cleaning::list_staff_members(&pool).await?;
    Ok(Json(StaffMembersResp { staff_members }))
}
