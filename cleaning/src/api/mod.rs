pub mod catalog;
pub mod task_lists;
pub mod template_lists;

use axum::{
    extract::FromRequest,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{config::InfraPool, error::ApiError};

/// JSON extractor whose rejections are reported in the same `{"msg": ..}` shape as
/// every other failure.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

pub fn router(st: InfraPool) -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { (StatusCode::OK, Json(json!({"status": "ok"}))) }),
        )
        .merge(template_lists::template_lists_router(st.clone()))
        .merge(catalog::catalog_router(st.clone()))
        .merge(task_lists::task_lists_router(st.clone()))
        .merge(task_lists::task_lists_manager_router(st.clone()))
        .with_state(st)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::testing::{bearer, future_date, setup_pool};

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let req = match body {
            Some(body) => req
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => req.body(Body::empty()).unwrap(),
        };
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(setup_pool().await);
        let (status, body) = send(&app, Method::GET, "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn test_authentication_and_roles() {
        let app = router(setup_pool().await);
        let (status, body) = send(&app, Method::GET, "/template-lists", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["msg"], "Invalid token");

        let (status, _) = send(
            &app,
            Method::GET,
            "/task-lists",
            Some("garbage"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let staff = bearer(&["StaffMember"]);
        let (status, _) = send(&app, Method::GET, "/template-lists", Some(&staff), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, _) = send(&app, Method::GET, "/staff-members", Some(&staff), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, body) = send(&app, Method::GET, "/task-lists", Some(&staff), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        let outsider = bearer(&["Lifeguard"]);
        let (status, _) = send(&app, Method::GET, "/task-lists", Some(&outsider), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_manager_routes_reject_staff_before_reading_body() {
        let app = router(setup_pool().await);
        let staff = bearer(&["StaffMember"]);
        let malformed = json!({"template_list_id": "one"});
        for (method, uri) in [
            (Method::POST, "/task-lists"),
            (Method::POST, "/task-lists/1/tasks"),
            (Method::POST, "/task-lists/1/signatures/manager"),
            (Method::PUT, "/task-lists/1/staff-member"),
        ] {
            let (status, _) =
                send(&app, method, uri, Some(&staff), Some(malformed.clone())).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        }
        let (status, _) = send(&app, Method::DELETE, "/task-lists/abc", Some(&staff), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        // staff routes sharing a path stay open
        let (status, _) = send(&app, Method::GET, "/task-lists/abc", Some(&staff), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cleaning_day() {
        let app = router(setup_pool().await);
        let manager = bearer(&["Manager"]);
        let staff = bearer(&["StaffMember"]);

        let (status, body) = send(
            &app,
            Method::POST,
            "/template-lists",
            Some(&manager),
            Some(json!({"title": "Morning"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let template_list_id = body["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/template-lists/{template_list_id}/templates"),
            Some(&manager),
            Some(json!({"description": "Mop floor", "area_description": "Wet changing"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (_, areas) = send(&app, Method::GET, "/areas", Some(&manager), None).await;
        let area_id = areas[0]["id"].as_i64().unwrap();
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/template-lists/{template_list_id}/templates"),
            Some(&manager),
            Some(json!({"description": "Restock towels", "area_id": area_id})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, view) = send(
            &app,
            Method::GET,
            &format!("/template-lists/{template_list_id}"),
            Some(&manager),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["templates"].as_array().unwrap().len(), 2);

        let date = future_date(1).to_string();
        let (status, body) = send(
            &app,
            Method::POST,
            "/task-lists",
            Some(&manager),
            Some(json!({"template_list_id": template_list_id, "date": date})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let list_id = body["id"].as_i64().unwrap();

        let (status, view) = send(
            &app,
            Method::GET,
            &format!("/task-lists/{list_id}"),
            Some(&staff),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["date"], date);
        assert_eq!(view["manager_signature"], Value::Null);
        let tasks = view["tasks"].as_array().unwrap();
        assert_eq!(tasks[0]["description"], "Mop floor");
        assert_eq!(tasks[1]["area_description"], "Wet changing");
        let task_id = tasks[0]["id"].as_i64().unwrap();

        let complete = format!("/task-lists/{list_id}/tasks/{task_id}/complete");
        let (status, _) = send(&app, Method::POST, &complete, Some(&staff), None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(&app, Method::POST, &complete, Some(&staff), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["msg"].as_str().unwrap().contains("already completed"));

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/task-lists/{list_id}/signatures/staff"),
            Some(&staff),
            Some(json!({"signature": "J. Smith"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/task-lists/{list_id}/signatures/manager"),
            Some(&staff),
            Some(json!({"signature": "J. Smith"})),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        let (status, body) = send(
            &app,
            Method::POST,
            &format!("/task-lists/{list_id}/signatures/manager"),
            Some(&manager),
            Some(json!({"signature": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "signature must not be empty");

        let (status, _) = send(
            &app,
            Method::PUT,
            &format!("/task-lists/{list_id}/staff-member"),
            Some(&manager),
            Some(json!({"staff_member_id": 12})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/task-lists/{list_id}"),
            Some(&manager),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, body) = send(
            &app,
            Method::GET,
            &format!("/task-lists/{list_id}"),
            Some(&manager),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["msg"], format!("Cleaning task list {list_id} not found"));
    }

    #[tokio::test]
    async fn test_bad_requests() {
        let app = router(setup_pool().await);
        let manager = bearer(&["Manager"]);

        let (status, body) = send(
            &app,
            Method::GET,
            "/task-lists/abc",
            Some(&manager),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["msg"], "task list id must be an integer");

        let (status, _) = send(
            &app,
            Method::POST,
            "/task-lists",
            Some(&manager),
            Some(json!({"template_list_id": "one", "date": "2099-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(
            &app,
            Method::POST,
            "/template-lists",
            Some(&manager),
            Some(json!({"title": "Morning"})),
        )
        .await;
        let template_list_id = body["id"].as_i64().unwrap();
        let (status, _) = send(
            &app,
            Method::POST,
            "/task-lists",
            Some(&manager),
            Some(json!({"template_list_id": template_list_id, "date": "2000-01-01"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (_, body) = send(
            &app,
            Method::POST,
            "/task-lists",
            Some(&manager),
            Some(json!({"template_list_id": template_list_id, "date": future_date(0).to_string()})),
        )
        .await;
        let list_id = body["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/task-lists/{list_id}/tasks"),
            Some(&manager),
            Some(json!({"template_id": 1, "description": "Mop floor"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/template-lists/{template_list_id}/templates"),
            Some(&manager),
            Some(json!({"description": "Mop floor", "area_id": 1, "area_description": "Poolside"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/template-lists/{template_list_id}/templates/9"),
            Some(&manager),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_staff_members() {
        let app = router(setup_pool().await);
        let manager = bearer(&["Manager", "StaffMember"]);
        let (status, body) = send(&app, Method::GET, "/staff-members", Some(&manager), None).await;
        assert_eq!(status, StatusCode::OK);
        let members = body["staff_members"].as_array().unwrap();
        assert_eq!(members[0]["payroll_number"], "7");
        assert_eq!(members[1]["payroll_number"], "12");
    }
}
