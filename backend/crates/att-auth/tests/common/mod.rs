#![allow(dead_code)]

use serde_json::{Value, json};

pub const CALL_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(2);

pub fn whoami_body(id: &str, role: &str, college_id: i64) -> Value {
    json!({
        "id": "session-1",
        "active": true,
        "identity": {
            "id": id,
            "traits": { "email": format!("{id}@college.edu") },
            "metadata_public": { "role": role, "college_id": college_id }
        }
    })
}
