//! Flujos completos contra PostgreSQL
//!
//! Cada test corre sobre su propia base de datos creada por sqlx::test
//! con el schema de migrations/ aplicado. Se siembran usuarios por
//! repositorio y se emite el JWT directamente; el resto del flujo pasa
//! por el router real.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use dayflow_hrms::config::EnvironmentConfig;
use dayflow_hrms::models::user::Role;
use dayflow_hrms::repositories::profile_repository::ProfileRepository;
use dayflow_hrms::repositories::user_repository::UserRepository;
use dayflow_hrms::routes::create_app;
use dayflow_hrms::state::AppState;
use dayflow_hrms::utils::jwt::generate_token;

const JWT_SECRET: &str = "workflow-test-secret";

fn test_config() -> EnvironmentConfig {
    EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expiration: 3600,
        cors_origins: vec![],
        otp_ttl_minutes: 10,
        mail_api_url: None,
        mail_api_key: None,
        mail_from: "no-reply@dayflow.local".to_string(),
    }
}

fn build_app(pool: PgPool) -> Router {
    create_app(AppState::new(pool, test_config()))
}

/// Sembrar un usuario verificado con perfil y devolver (id, token)
async fn seed_user(pool: &PgPool, employee_id: &str, email: &str, role: Role) -> (Uuid, String) {
    let users = UserRepository::new(pool.clone());
    let profiles = ProfileRepository::new(pool.clone());

    // Coste mínimo de bcrypt: el login por contraseña no se ejercita aquí
    let password_hash = bcrypt::hash("password123", 4).unwrap();
    let user = users
        .create(employee_id, email, &password_hash, "Test User", None, role, true)
        .await
        .unwrap();
    profiles.create_default(user.id).await.unwrap();

    let token = generate_token(user.id, &user.employee_id, user.role, JWT_SECRET, 3600).unwrap();
    (user.id, token)
}

fn get(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

fn post(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_public(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[sqlx::test(migrations = "./migrations")]
async fn test_check_in_then_out_single_record(pool: PgPool) {
    let (_, token) = seed_user(&pool, "E00001", "e1@example.com", Role::Employee).await;
    let app = build_app(pool.clone());

    let response = app
        .clone()
        .oneshot(post("/api/attendance/checkin", &token, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"]["check_in_time"].is_string());

    let response = app
        .clone()
        .oneshot(post("/api/attendance/checkout", &token, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"]["check_in_time"].is_string());
    assert!(body["data"]["check_out_time"].is_string());

    // La vista por rango muestra exactamente un registro del día
    let response = app.oneshot(get("/api/attendance", &token)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0]["check_in_time"].is_string());
    assert!(records[0]["check_out_time"].is_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_second_check_in_same_day_rejected(pool: PgPool) {
    let (_, token) = seed_user(&pool, "E00001", "e1@example.com", Role::Employee).await;
    let app = build_app(pool.clone());

    let response = app
        .clone()
        .oneshot(post("/api/attendance/checkin", &token, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post("/api/attendance/checkin", &token, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_check_out_without_check_in_rejected(pool: PgPool) {
    let (_, token) = seed_user(&pool, "E00001", "e1@example.com", Role::Employee).await;
    let app = build_app(pool.clone());

    let response = app
        .oneshot(post("/api/attendance/checkout", &token, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_check_in_allowed_on_approved_leave_day(pool: PgPool) {
    // Aprobar un permiso de hoy deja un registro LEAVE sin check-in;
    // el empleado todavía puede fichar ese día
    let (_, employee) = seed_user(&pool, "E00001", "e1@example.com", Role::Employee).await;
    let (_, admin) = seed_user(&pool, "HR00001", "hr@example.com", Role::Admin).await;
    let app = build_app(pool.clone());

    let today = Utc::now().date_naive().to_string();
    let response = app
        .clone()
        .oneshot(post(
            "/api/leave/apply",
            &employee,
            json!({ "leave_type": "PAID", "start_date": today, "end_date": today }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let leave_id = body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/leave/{}/decide", leave_id),
            &admin,
            json!({ "decision": "APPROVED" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(post("/api/attendance/checkin", &employee, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"]["check_in_time"].is_string());

    // El segundo check-in sigue rechazado
    let response = app
        .oneshot(post("/api/attendance/checkin", &employee, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_decided_leave_is_terminal(pool: PgPool) {
    let (_, employee) = seed_user(&pool, "E00001", "e1@example.com", Role::Employee).await;
    let (admin_id, admin) = seed_user(&pool, "HR00001", "hr@example.com", Role::Admin).await;
    let app = build_app(pool.clone());

    let apply = json!({
        "leave_type": "SICK",
        "start_date": "2024-01-10",
        "end_date": "2024-01-12"
    });
    let response = app
        .clone()
        .oneshot(post("/api/leave/apply", &employee, apply.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "PENDING");
    let leave_id = body["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/leave/{}/decide", leave_id),
            &admin,
            json!({ "decision": "APPROVED" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "APPROVED");
    assert_eq!(body["data"]["decided_by"], admin_id.to_string());

    // Una segunda decisión sobre la misma solicitud es un conflicto
    let response = app
        .clone()
        .oneshot(post(
            &format!("/api/leave/{}/decide", leave_id),
            &admin,
            json!({ "decision": "REJECTED" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Re-solicitar las mismas fechas crea una solicitud independiente
    // y la primera se mantiene APPROVED
    let response = app
        .clone()
        .oneshot(post("/api/leave/apply", &employee, apply))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "PENDING");
    assert_ne!(body["data"]["id"].as_str().unwrap(), leave_id);

    let response = app.oneshot(get("/api/leave", &employee)).await.unwrap();
    let body = body_json(response).await;
    let statuses: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["status"].as_str().unwrap())
        .collect();
    assert!(statuses.contains(&"APPROVED"));
    assert!(statuses.contains(&"PENDING"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_employee_never_sees_other_users_records(pool: PgPool) {
    let (_, alice) = seed_user(&pool, "E00001", "alice@example.com", Role::Employee).await;
    let (_, bob) = seed_user(&pool, "E00002", "bob@example.com", Role::Employee).await;
    let app = build_app(pool.clone());

    for token in [&alice, &bob] {
        let response = app
            .clone()
            .oneshot(post("/api/attendance/checkin", token.as_str(), json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = app
        .clone()
        .oneshot(post(
            "/api/leave/apply",
            &bob,
            json!({ "leave_type": "UNPAID", "start_date": "2024-02-01", "end_date": "2024-02-02" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Alice solo ve su propio registro de asistencia
    let response = app
        .clone()
        .oneshot(get("/api/attendance", &alice))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Y ninguna solicitud de permiso de Bob
    let response = app
        .clone()
        .oneshot(get("/api/leave", &alice))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());

    // El scope=all queda prohibido para empleados
    let response = app
        .oneshot(get("/api/attendance?scope=all", &alice))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_me_null_clears_phone(pool: PgPool) {
    let (_, token) = seed_user(&pool, "E00001", "e1@example.com", Role::Employee).await;
    let app = build_app(pool.clone());

    let response = app
        .clone()
        .oneshot(put("/api/me", &token, json!({ "phone": "600111222" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["phone"], "600111222");

    // null explícito borra el teléfono; un body vacío lo dejaría igual
    let response = app
        .clone()
        .oneshot(put("/api/me", &token, json!({ "phone": null })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["data"]["phone"].is_null());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_signup_rejected(pool: PgPool) {
    let app = build_app(pool);
    let signup = json!({
        "employee_id": "E00001",
        "email": "dup@example.com",
        "full_name": "Dup User",
        "role": "EMPLOYEE",
        "password": "password123"
    });

    let response = app
        .clone()
        .oneshot(post_public("/api/auth/signup", signup.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(post_public("/api/auth/signup", signup))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_without_otp_never_yields_session(pool: PgPool) {
    let app = build_app(pool);

    let response = app
        .clone()
        .oneshot(post_public(
            "/api/auth/signup",
            json!({
                "employee_id": "E00001",
                "email": "otp@example.com",
                "full_name": "Otp User",
                "role": "EMPLOYEE",
                "password": "password123"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Contraseña correcta: la fase 1 solo envía el OTP, sin token
    let response = app
        .oneshot(post_public(
            "/api/auth/login",
            json!({ "email": "otp@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["otp_sent"], true);
    assert!(body.get("token").is_none());
}
