//! REST API layer: route handlers, DTOs, extractors, and router
//! composition.
//!
//! All endpoints are mounted at the root level; the paths themselves
//! are the wire contract.

pub mod dto;
pub mod extract;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every REST endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::customer::create_customer,
        handlers::customer::list_customers,
        handlers::customer::update_customer,
        handlers::customer::delete_customer,
        handlers::customer::starts_with,
        handlers::customer::ends_with,
        handlers::customer::contains,
        handlers::customer::find_credit_is_not_zero,
        handlers::customer::sort_by_name,
        handlers::customer::where_and,
        handlers::customer::list_between_credit,
        handlers::customer::sum_credit,
        handlers::customer::max_credit,
        handlers::customer::min_credit,
        handlers::customer::avg_credit,
        handlers::system::check_db_connection,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Customers", description = "Customer CRUD and search"),
        (name = "Aggregates", description = "Credit aggregate queries"),
        (name = "System", description = "Connectivity and health"),
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new().merge(handlers::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/docs")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::build_router;
    use crate::app_state::AppState;
    use crate::persistence::memory::InMemoryRepository;
    use crate::service::CustomerService;

    fn test_app() -> axum::Router {
        let repository = Arc::new(InMemoryRepository::new());
        let customer_service = Arc::new(CustomerService::new(repository));
        build_router().with_state(AppState { customer_service })
    }

    async fn send(
        app: &axum::Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(value) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(value.to_string())),
            None => builder.body(Body::empty()),
        };
        let Ok(request) = request else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("request failed");
        };
        let status = response.status();
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn create(app: &axum::Router, name: &str, credit: i64) -> Value {
        let (status, body) = send(
            app,
            "POST",
            "/customer/create",
            Some(json!({"name": name, "credit": credit})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    fn names(body: &Value) -> Vec<String> {
        let Some(list) = body.as_array() else {
            panic!("expected a JSON array, got {body}");
        };
        list.iter()
            .filter_map(|c| c.pointer("/name").and_then(Value::as_str))
            .map(String::from)
            .collect()
    }

    #[tokio::test]
    async fn create_then_list_contains_record() {
        let app = test_app();
        let created = create(&app, "Zara", 500).await;
        assert!(created.pointer("/id").and_then(Value::as_str).is_some());

        let (status, body) = send(&app, "GET", "/customer/list", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(names(&body).contains(&"Zara".to_string()));
    }

    #[tokio::test]
    async fn create_rejects_unknown_fields() {
        let app = test_app();
        let (status, body) = send(
            &app,
            "POST",
            "/customer/create",
            Some(json!({"name": "Zara", "vip": true})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.pointer("/error/code").and_then(Value::as_u64),
            Some(1001)
        );
    }

    #[tokio::test]
    async fn create_accepts_urlencoded_form() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/customer/create")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Zara&credit=250"));
        let Ok(request) = request else {
            panic!("request build failed");
        };
        let Ok(response) = app.clone().oneshot(request).await else {
            panic!("request failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn starts_with_returns_exact_subset() {
        let app = test_app();
        for (name, credit) in [("Alice", 10), ("Anna", 20), ("Bob", 30)] {
            create(&app, name, credit).await;
        }
        let (status, body) = send(&app, "GET", "/customer/startsWith?keyword=A", None).await;
        assert_eq!(status, StatusCode::OK);
        let found = names(&body);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|n| n.starts_with('A')));
    }

    #[tokio::test]
    async fn contains_and_max_credit_scenario() {
        let app = test_app();
        create(&app, "Zara", 500).await;

        let (status, body) = send(&app, "GET", "/customer/contains?keyword=ar", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(names(&body).contains(&"Zara".to_string()));

        let (status, body) = send(&app, "GET", "/customer/maxCredit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.pointer("/maxCredit").and_then(Value::as_i64),
            Some(500)
        );
    }

    #[tokio::test]
    async fn sort_by_name_is_non_decreasing() {
        let app = test_app();
        for (name, credit) in [("Cleo", 1), ("Alice", 2), ("Bob", 3)] {
            create(&app, name, credit).await;
        }
        let (status, body) = send(&app, "GET", "/customer/sortByName", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["Alice", "Bob", "Cleo"]);
    }

    #[tokio::test]
    async fn where_and_applies_both_predicates() {
        let app = test_app();
        // Only "Hamza" with positive credit satisfies name-contains-z AND credit > 0.
        for (name, credit) in [("Hamza", 10), ("Hazel", 0), ("Alice", 50)] {
            create(&app, name, credit).await;
        }
        let (status, body) = send(&app, "GET", "/customer/whereAnd", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["Hamza"]);
    }

    #[tokio::test]
    async fn list_between_credit_uses_half_open_range() {
        let app = test_app();
        for (name, credit) in [("Low", 999), ("Edge", 1_000), ("High", 200_000)] {
            create(&app, name, credit).await;
        }
        let (status, body) = send(&app, "GET", "/customer/listBetweenCredit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(names(&body), vec!["Edge"]);
    }

    #[tokio::test]
    async fn update_and_delete_round_trip() {
        let app = test_app();
        let created = create(&app, "Zara", 500).await;
        let Some(id) = created.pointer("/id").and_then(Value::as_str) else {
            panic!("missing id in create response");
        };

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/customer/update/{id}"),
            Some(json!({"credit": 750})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.pointer("/credit").and_then(Value::as_i64), Some(750));
        assert_eq!(
            body.pointer("/name").and_then(Value::as_str),
            Some("Zara")
        );

        let (status, body) = send(&app, "DELETE", &format!("/customer/delete/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(
            body.pointer("/message")
                .and_then(Value::as_str)
                .is_some_and(|m| m.contains("deleted"))
        );

        let (_, body) = send(&app, "GET", "/customer/list", None).await;
        assert!(!names(&body).contains(&"Zara".to_string()));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let app = test_app();
        let id = uuid::Uuid::new_v4();
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/customer/update/{id}"),
            Some(json!({"credit": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body.pointer("/error/code").and_then(Value::as_u64),
            Some(2001)
        );
    }

    #[tokio::test]
    async fn empty_update_body_is_rejected() {
        let app = test_app();
        let created = create(&app, "Zara", 500).await;
        let Some(id) = created.pointer("/id").and_then(Value::as_str) else {
            panic!("missing id in create response");
        };
        let (status, _) = send(
            &app,
            "PUT",
            &format!("/customer/update/{id}"),
            Some(json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn aggregates_on_empty_table() {
        let app = test_app();

        let (status, body) = send(&app, "GET", "/customer/sumCredit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.pointer("/_sum/credit").and_then(Value::as_i64),
            Some(0)
        );

        let (status, body) = send(&app, "GET", "/customer/minCredit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.pointer("/minCredit").is_some_and(Value::is_null));

        let (status, body) = send(&app, "GET", "/customer/avgCredit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.pointer("/avgCredit").is_some_and(Value::is_null));
    }

    #[tokio::test]
    async fn sum_credit_adds_all_balances() {
        let app = test_app();
        for (name, credit) in [("A", 10), ("B", 20), ("C", 30)] {
            create(&app, name, credit).await;
        }
        let (status, body) = send(&app, "GET", "/customer/sumCredit", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.pointer("/_sum/credit").and_then(Value::as_i64),
            Some(60)
        );
    }

    #[tokio::test]
    async fn check_db_connection_reports_success() {
        let app = test_app();
        let (status, body) = send(&app, "GET", "/check-db-connection", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body.pointer("/message").and_then(Value::as_str),
            Some("Connected to the database")
        );
    }

    #[tokio::test]
    async fn credit_not_zero_includes_negative_balances() {
        let app = test_app();
        for (name, credit) in [("Zero", 0), ("Plus", 5), ("Minus", -5)] {
            create(&app, name, credit).await;
        }
        let (status, body) = send(&app, "GET", "/customer/findCreditIsNotZero", None).await;
        assert_eq!(status, StatusCode::OK);
        let mut found = names(&body);
        found.sort_unstable();
        assert_eq!(found, vec!["Minus", "Plus"]);
    }
}
