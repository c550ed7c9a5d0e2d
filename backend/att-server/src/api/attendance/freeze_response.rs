use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreezeResponse {
    pub student_id: i64,
    pub rows_affected: u64,
}
