use crate::{CliClientResult, ClientError};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

const SESSION_HEADER: &str = "X-Session-Token";

/// HTTP client for the att-server REST API
pub struct Client {
    pub base_url: String,
    pub session_token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `session_token` - Sent as X-Session-Token when present
    pub fn new(base_url: &str, session_token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_token: session_token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.session_token {
            req = req.header(SESSION_HEADER, token);
        }

        req
    }

    /// Send and map `{"error": {...}}` bodies to `ClientError::Rejected`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        if !status.is_success() {
            let error = body.get("error");
            let field = |name: &str, default: &str| {
                error
                    .and_then(|e| e.get(name))
                    .and_then(|v| v.as_str())
                    .unwrap_or(default)
                    .to_string()
            };
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                code: field("code", "UNKNOWN"),
                message: field("message", "Unknown error"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // QR tokens
    // =========================================================================

    pub async fn issue_qr(
        &self,
        course_id: i64,
        lecture_id: i64,
        ttl_secs: Option<u64>,
    ) -> CliClientResult<Value> {
        let mut path = format!("/api/attendance/course/{course_id}/lecture/{lecture_id}/qrcode");
        if let Some(ttl) = ttl_secs {
            path.push_str(&format!("?ttl_secs={ttl}"));
        }
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    pub async fn scan(&self, token: &str, student_id: Option<i64>) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct ScanRequest<'a> {
            token: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            student_id: Option<i64>,
        }

        let req = self
            .request(Method::POST, "/api/attendance/Mark/Scan")
            .json(&ScanRequest { token, student_id });
        self.execute(req).await
    }

    // =========================================================================
    // Attendance
    // =========================================================================

    pub async fn course_attendance(
        &self,
        course_id: i64,
        lecture_id: Option<i64>,
    ) -> CliClientResult<Value> {
        let mut path = format!("/api/attendance/get-attendance-course?course_id={course_id}");
        if let Some(lecture_id) = lecture_id {
            path.push_str(&format!("&lecture_id={lecture_id}"));
        }
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    pub async fn student_attendance(
        &self,
        student_id: i64,
        course_id: Option<i64>,
    ) -> CliClientResult<Value> {
        let mut path = format!("/api/attendance/student/{student_id}");
        if let Some(course_id) = course_id {
            path.push_str(&format!("?course_id={course_id}"));
        }
        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    pub async fn update_status(
        &self,
        student_id: i64,
        course_id: i64,
        lecture_id: i64,
        date: Option<&str>,
        status: &str,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            student_id: i64,
            course_id: i64,
            lecture_id: i64,
            #[serde(skip_serializing_if = "Option::is_none")]
            date: Option<&'a str>,
            status: &'a str,
        }

        let body = UpdateRequest {
            student_id,
            course_id,
            lecture_id,
            date,
            status,
        };
        let req = self
            .request(Method::PUT, "/api/attendance/status")
            .json(&body);
        self.execute(req).await
    }

    pub async fn freeze_student(&self, student_id: i64) -> CliClientResult<Value> {
        let req = self.request(
            Method::POST,
            &format!("/api/attendance/student/{student_id}/freeze"),
        );
        self.execute(req).await
    }
}
