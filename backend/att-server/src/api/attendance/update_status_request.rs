use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub student_id: i64,
    pub course_id: i64,
    pub lecture_id: i64,
    /// `YYYY-MM-DD`; every recorded day when absent
    #[serde(default)]
    pub date: Option<String>,
    pub status: String,
}
