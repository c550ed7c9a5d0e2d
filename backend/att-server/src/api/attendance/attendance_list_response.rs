use crate::AttendanceDto;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceListResponse {
    pub attendance: Vec<AttendanceDto>,
}
