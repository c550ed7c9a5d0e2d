use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct StudentAttendanceQuery {
    pub course_id: Option<String>,
}
