use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRequest {
    pub token: String,
    /// Student to mark; the caller's own record when absent
    #[serde(default)]
    pub student_id: Option<i64>,
}
