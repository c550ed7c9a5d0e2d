#![allow(dead_code)]

//! Test infrastructure for att-server API tests

use att_auth::{
    AuthorizationPipeline, InMemoryPolicyClient, JwtSessionValidator, SESSION_HEADER,
};
use att_core::{RelationTuple, StudentStatus, TenantId};
use att_db::{AttendanceLedger, LectureRepository, StudentRepository};
use att_server::{AppState, DbProfileStore, build_router};
use att_token::ProofTokenCodec;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, body::Body};
use chrono::Utc;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const JWT_SECRET: &str = "test-session-secret-at-least-32-chars!";
pub const SIGNING_SECRET: &str = "test-signing-secret-at-least-32-chars!";
pub const LOGIN_URL: &str = "http://idp.test/self-service/login/browser";

pub const TENANT: TenantId = 7;
pub const OTHER_TENANT: TenantId = 8;
pub const COURSE: i64 = 10;
pub const LECTURE: i64 = 55;
pub const FOREIGN_COURSE: i64 = 20;
pub const FOREIGN_LECTURE: i64 = 75;
/// Second course of TENANT
pub const OTHER_COURSE: i64 = 11;
/// Belongs to OTHER_COURSE
pub const OTHER_COURSE_LECTURE: i64 = 57;
pub const STUDENT: i64 = 1;
pub const OTHER_STUDENT: i64 = 2;
/// Belongs to OTHER_TENANT
pub const FOREIGN_STUDENT: i64 = 3;

pub const ADMIN: &str = "admin-7";
pub const FACULTY: &str = "faculty-7";
pub const FOREIGN_FACULTY: &str = "faculty-8";
/// principal of STUDENT
pub const STUDENT_PRINCIPAL: &str = "student-1";
/// principal of OTHER_STUDENT
pub const OTHER_STUDENT_PRINCIPAL: &str = "student-2";
pub const FOREIGN_STUDENT_PRINCIPAL: &str = "student-3";

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub policy: Arc<InMemoryPolicyClient>,
    pub tokens: ProofTokenCodec,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

impl TestResponse {
    pub fn error_code(&self) -> &str {
        self.body["error"]["code"].as_str().unwrap_or_default()
    }
}

pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    att_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Two colleges with courses, lectures and students
pub async fn seed(pool: &SqlitePool) {
    let statements = [
        "INSERT INTO colleges (id, name) VALUES (7, 'North College')",
        "INSERT INTO colleges (id, name) VALUES (8, 'South College')",
        "INSERT INTO courses (id, tenant_id, name) VALUES (10, 7, 'Compilers')",
        "INSERT INTO courses (id, tenant_id, name) VALUES (11, 7, 'Databases')",
        "INSERT INTO courses (id, tenant_id, name) VALUES (20, 8, 'Networks')",
        "INSERT INTO lectures (id, tenant_id, course_id, title) VALUES (55, 7, 10, 'Parsing')",
        "INSERT INTO lectures (id, tenant_id, course_id, title) VALUES (57, 7, 11, 'Indexes')",
        "INSERT INTO lectures (id, tenant_id, course_id, title) VALUES (75, 8, 20, 'Routing')",
        "INSERT INTO students (id, tenant_id, principal_id, name) VALUES (1, 7, 'student-1', 'Asha')",
        "INSERT INTO students (id, tenant_id, principal_id, name) VALUES (2, 7, 'student-2', 'Ravi')",
        "INSERT INTO students (id, tenant_id, principal_id, name) VALUES (3, 8, 'student-3', 'Meena')",
    ];
    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to seed fixtures");
    }
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with_tuples([]).await
}

pub async fn create_test_app_with_tuples(
    tuples: impl IntoIterator<Item = RelationTuple>,
) -> TestApp {
    let pool = create_test_pool().await;
    seed(&pool).await;

    let policy = Arc::new(InMemoryPolicyClient::with_tuples(tuples));
    let call_timeout = Duration::from_secs(2);
    let pipeline = AuthorizationPipeline::new(
        Arc::new(JwtSessionValidator::new(JWT_SECRET.as_bytes())),
        policy.clone(),
        Arc::new(DbProfileStore::new(StudentRepository::new(pool.clone()))),
        call_timeout,
    );
    let tokens = ProofTokenCodec::new(SIGNING_SECRET, Duration::from_secs(1800));

    let state = AppState {
        pool: pool.clone(),
        pipeline: Arc::new(pipeline),
        tokens: tokens.clone(),
        ledger: AttendanceLedger::new(pool.clone()),
        lectures: LectureRepository::new(pool.clone()),
        students: StudentRepository::new(pool.clone()),
        call_timeout,
        request_timeout: Duration::from_secs(10),
        login_url: LOGIN_URL.to_string(),
        metrics: None,
    };

    TestApp {
        router: build_router(state),
        pool,
        policy,
        tokens,
    }
}

/// HS256 session JWT as the identity provider would mint it
pub fn session(principal: &str, role: &str, tenant_id: TenantId) -> String {
    session_with_expiry(principal, role, tenant_id, Utc::now().timestamp() + 3600)
}

pub fn session_with_expiry(principal: &str, role: &str, tenant_id: TenantId, exp: i64) -> String {
    let claims = json!({
        "sub": principal,
        "tenant_id": tenant_id,
        "role": role,
        "iat": Utc::now().timestamp() - 10,
        "exp": exp,
    });
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .expect("Failed to encode session JWT")
}

pub fn admin_session() -> String {
    session(ADMIN, "admin", TENANT)
}

pub fn faculty_session() -> String {
    session(FACULTY, "faculty", TENANT)
}

pub fn student_session() -> String {
    session(STUDENT_PRINCIPAL, "student", TENANT)
}

pub fn request(method: &str, uri: &str, session: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = session {
        builder = builder.header(SESSION_HEADER, token);
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(http::header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("Failed to build request")
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str, session: Option<&str>) -> TestResponse {
        self.send(request("GET", uri, session, None)).await
    }

    pub async fn post(&self, uri: &str, session: Option<&str>, body: Value) -> TestResponse {
        self.send(request("POST", uri, session, Some(body))).await
    }

    pub async fn put(&self, uri: &str, session: Option<&str>, body: Value) -> TestResponse {
        self.send(request("PUT", uri, session, Some(body))).await
    }

    pub async fn delete(&self, uri: &str, session: Option<&str>, body: Value) -> TestResponse {
        self.send(request("DELETE", uri, session, Some(body))).await
    }

    /// Issue a token through the API as faculty
    pub async fn issue_token(&self, course_id: i64, lecture_id: i64) -> String {
        let response = self
            .get(&qr_uri(course_id, lecture_id), Some(&faculty_session()))
            .await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.body);
        response.body["token"]
            .as_str()
            .expect("token in response")
            .to_string()
    }

    pub async fn scan(&self, session: &str, token: &str, student_id: Option<i64>) -> TestResponse {
        let mut body = json!({ "token": token });
        if let Some(id) = student_id {
            body["student_id"] = json!(id);
        }
        self.post("/api/attendance/Mark/Scan", Some(session), body).await
    }

    pub async fn set_student_status(&self, student_id: i64, status: StudentStatus) {
        sqlx::query("UPDATE students SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(student_id)
            .execute(&self.pool)
            .await
            .expect("Failed to update student status");
    }

    pub async fn attendance_rows(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance")
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count attendance rows")
    }
}

pub fn qr_uri(course_id: i64, lecture_id: i64) -> String {
    format!("/api/attendance/course/{course_id}/lecture/{lecture_id}/qrcode")
}

/// Tuple granting `subject` `action` on a student of `tenant_id`
pub fn grant(subject: &str, action: &str, tenant_id: TenantId, student_id: i64) -> RelationTuple {
    RelationTuple::new(
        "students",
        att_auth::scoped_object(tenant_id, student_id),
        action,
        subject,
    )
}
