use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use sea_orm_migration::MigratorTrait;
use serde_json::{json, Value};
use tower::ServiceExt;

use worker_admin::config::PaginationConfig;
use worker_admin::domain::UserRepositoryInterface;
use worker_admin::infrastructure::database::entities::user;
use worker_admin::infrastructure::database::migrator::Migrator;
use worker_admin::infrastructure::database::seed::SuperAdminSeed;
use worker_admin::infrastructure::database::{ensure_super_admin, SeaOrmUserRepository};
use worker_admin::{create_api_router, init_database, DatabaseConfig};

struct TestApp {
    router: Router,
    db: DatabaseConnection,
    super_admin_id: i32,
}

async fn spawn_app() -> TestApp {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None).await.expect("Failed to migrate");

    // bcrypt's minimum cost (bcrypt::MIN_COST is not exported).
    let repo: Arc<dyn UserRepositoryInterface> =
        Arc::new(SeaOrmUserRepository::new(db.clone()).with_bcrypt_cost(4));

    let admin = ensure_super_admin(
        repo.as_ref(),
        &SuperAdminSeed {
            full_name: "Root".to_string(),
            phone: "000".to_string(),
            password: "root-password".to_string(),
        },
    )
    .await
    .expect("Failed to seed super-admin");

    let router = create_api_router(repo, db.clone(), PaginationConfig::default(), None);

    TestApp {
        router,
        db,
        super_admin_id: admin.id,
    }
}

async fn send(app: &TestApp, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_worker(app: &TestApp, phone: &str) -> i32 {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/workers",
        Some(json!({
            "fullName": format!("Worker {phone}"),
            "personal_id": "AA1234567",
            "phone": phone,
            "work_type": "electrician",
            "password": "secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    user::Entity::find()
        .all(&app.db)
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.phone.as_deref() == Some(phone))
        .unwrap()
        .id
}

async fn insert_admin(app: &TestApp, phone: &str) -> i32 {
    let now = chrono::Utc::now();
    user::ActiveModel {
        full_name: Set(Some("Second admin".to_string())),
        phone: Set(Some(phone.to_string())),
        role: Set(user::UserRole::Admin),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&app.db)
    .await
    .unwrap()
    .id
}

#[tokio::test]
async fn test_create_worker() {
    let app = spawn_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/workers",
        Some(json!({ "fullName": "Jane Roe", "phone": "555", "password": "pw" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "Worker added successfully" }));

    let stored = user::Entity::find()
        .all(&app.db)
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.phone.as_deref() == Some("555"))
        .unwrap();
    assert_eq!(stored.role, user::UserRole::Worker);
    assert_eq!(stored.full_name.as_deref(), Some("Jane Roe"));
    assert!(stored.personal_id.is_none());
    assert!(stored.work_type.is_none());

    let hash = stored.password_hash.unwrap();
    assert_ne!(hash, "pw");
    assert!(bcrypt::verify("pw", &hash).unwrap());
}

#[tokio::test]
async fn test_create_worker_ignores_role_in_body() {
    let app = spawn_app().await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/workers",
        Some(json!({ "phone": "556", "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let stored = user::Entity::find()
        .all(&app.db)
        .await
        .unwrap()
        .into_iter()
        .find(|u| u.phone.as_deref() == Some("556"))
        .unwrap();
    assert_eq!(stored.role, user::UserRole::Worker);
}

#[tokio::test]
async fn test_duplicate_phone_is_rejected() {
    let app = spawn_app().await;
    let first_id = create_worker(&app, "555").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/workers",
        Some(json!({ "fullName": "Impostor", "phone": "555" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "message": "The user already exists" }));

    let users = user::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(users.len(), 2); // super-admin + first worker
    let first = users.into_iter().find(|u| u.id == first_id).unwrap();
    assert_eq!(first.full_name.as_deref(), Some("Worker 555"));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = spawn_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/workers")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_user_partial_update() {
    let app = spawn_app().await;
    let id = create_worker(&app, "555").await;
    let before = user::Entity::find_by_id(id).one(&app.db).await.unwrap().unwrap();

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/v1/users/{id}"),
        Some(json!({ "work_type": "plumber", "role": "admin" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "User updated successfully" }));

    let after = user::Entity::find_by_id(id).one(&app.db).await.unwrap().unwrap();
    assert_eq!(after.work_type.as_deref(), Some("plumber"));
    assert_eq!(after.full_name, before.full_name);
    assert_eq!(after.personal_id, before.personal_id);
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.password_hash, before.password_hash);
    assert_eq!(after.role, user::UserRole::Worker);
}

#[tokio::test]
async fn test_edit_user_applies_sent_empty_values() {
    let app = spawn_app().await;
    let id = create_worker(&app, "555").await;

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/v1/users/{id}"),
        Some(json!({ "personal_id": "", "fullName": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let after = user::Entity::find_by_id(id).one(&app.db).await.unwrap().unwrap();
    assert_eq!(after.personal_id.as_deref(), Some(""));
    assert_eq!(after.full_name.as_deref(), Some("Worker 555"));
}

#[tokio::test]
async fn test_edit_user_password_is_rehashed() {
    let app = spawn_app().await;
    let id = create_worker(&app, "555").await;

    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/v1/users/{id}"),
        Some(json!({ "password": "new-secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let after = user::Entity::find_by_id(id).one(&app.db).await.unwrap().unwrap();
    assert!(bcrypt::verify("new-secret", &after.password_hash.unwrap()).unwrap());
}

#[tokio::test]
async fn test_edit_missing_user() {
    let app = spawn_app().await;

    for uri in ["/api/v1/users/9999", "/api/v1/users/not-a-number"] {
        let (status, body) = send(&app, "PATCH", uri, Some(json!({ "fullName": "Ghost" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "success": false, "message": "User not found" }));
    }

    let users = user::Entity::find().all(&app.db).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_ne!(users[0].full_name.as_deref(), Some("Ghost"));
}

#[tokio::test]
async fn test_edit_phone_to_taken_value_is_rejected() {
    let app = spawn_app().await;
    create_worker(&app, "555").await;
    let id = create_worker(&app, "556").await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/v1/users/{id}"),
        Some(json!({ "phone": "555" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The user already exists");
}

#[tokio::test]
async fn test_delete_worker() {
    let app = spawn_app().await;
    let id = create_worker(&app, "555").await;

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/workers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Worker deleted successfully", "id": id })
    );
    assert!(user::Entity::find_by_id(id).one(&app.db).await.unwrap().is_none());

    let (status, body) = send(&app, "DELETE", &format!("/api/v1/workers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn test_delete_admins_is_forbidden() {
    let app = spawn_app().await;
    let admin_id = insert_admin(&app, "111").await;

    for id in [admin_id, app.super_admin_id] {
        let (status, body) = send(&app, "DELETE", &format!("/api/v1/workers/{id}"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
        assert!(user::Entity::find_by_id(id).one(&app.db).await.unwrap().is_some());
    }
}

#[tokio::test]
async fn test_fetch_workers_redacts_and_excludes_super_admin() {
    let app = spawn_app().await;
    let worker_id = create_worker(&app, "555").await;
    let admin_id = insert_admin(&app, "111").await;

    let (status, body) = send(&app, "GET", "/api/v1/workers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let workers = body["workers"].as_array().unwrap();
    let ids: Vec<i64> = workers.iter().map(|w| w["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![worker_id as i64, admin_id as i64]);
    assert!(!ids.contains(&(app.super_admin_id as i64)));

    for worker in workers {
        let obj = worker.as_object().unwrap();
        for key in ["id", "fullName", "personal_id", "phone"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        for key in ["password", "password_hash", "role", "work_type"] {
            assert!(!obj.contains_key(key), "{key} leaked");
        }
    }
}

#[tokio::test]
async fn test_fetch_workers_pagination() {
    let app = spawn_app().await;
    let mut ids = Vec::new();
    for i in 0..25 {
        ids.push(create_worker(&app, &format!("7{i:02}")).await as i64);
    }

    let page_ids = |body: &Value| -> Vec<i64> {
        body["workers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["id"].as_i64().unwrap())
            .collect()
    };

    let (_, body) = send(&app, "GET", "/api/v1/workers?page=2&offset=10", None).await;
    assert_eq!(page_ids(&body), ids[10..20]);

    let (_, body) = send(&app, "GET", "/api/v1/workers?page=3&pageSize=10", None).await;
    assert_eq!(page_ids(&body), ids[20..]);

    // Defaults: page 1, 20 rows
    let (_, body) = send(&app, "GET", "/api/v1/workers?page=abc&offset=xyz", None).await;
    assert_eq!(page_ids(&body), ids[..20]);

    let (_, body) = send(&app, "GET", "/api/v1/workers?page=9", None).await;
    assert!(page_ids(&body).is_empty());
}

#[tokio::test]
async fn test_fetch_workers_far_page_is_empty() {
    let app = spawn_app().await;
    create_worker(&app, "801").await;

    let (status, body) = send(
        &app,
        "GET",
        "/api/v1/workers?page=100000000000000000&pageSize=100",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["success"], true);
    assert_eq!(body["workers"], json!([]));
}

#[tokio::test]
async fn test_fetch_workers_tolerates_repeated_keys() {
    let app = spawn_app().await;
    let mut ids = Vec::new();
    for i in 0..6 {
        ids.push(create_worker(&app, &format!("81{i}")).await as i64);
    }

    let ids_of = |body: &Value| -> Vec<i64> {
        body["workers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["id"].as_i64().unwrap())
            .collect()
    };

    // pageSize beats offset
    let (status, body) = send(&app, "GET", "/api/v1/workers?pageSize=2&offset=4", None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(ids_of(&body), ids[..2]);

    // First value of a repeated key wins
    let (status, body) = send(&app, "GET", "/api/v1/workers?page=2&page=1&pageSize=2", None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(ids_of(&body), ids[2..4]);
}

#[tokio::test]
async fn test_create_workers_without_phone() {
    let app = spawn_app().await;

    for name in ["No phone one", "No phone two"] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/workers",
            Some(json!({ "fullName": name, "work_type": "cleaner" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(body["success"], true);
    }

    let workers: Vec<_> = user::Entity::find()
        .all(&app.db)
        .await
        .unwrap()
        .into_iter()
        .filter(|u| u.role == user::UserRole::Worker)
        .collect();

    assert_eq!(workers.len(), 2);
    assert!(workers.iter().all(|u| u.phone.is_none()));
}

#[tokio::test]
async fn test_health() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = spawn_app().await;

    let response = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-me")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers().get("x-request-id").unwrap(), "trace-me");
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let app = spawn_app().await;

    let (status, body) = send(&app, "GET", "/api-doc/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/workers"].is_object());
    assert!(body["paths"]["/api/v1/users/{user_id}"].is_object());
}
