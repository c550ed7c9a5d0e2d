use att_core::{CourseId, LectureId, TenantId};

use serde::{Deserialize, Serialize};

/// What a proof token asserts: this lecture, in this window.
///
/// Instants are unix seconds. A token is expired once `now >= expires_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofTokenPayload {
    pub tenant_id: TenantId,
    pub course_id: CourseId,
    pub lecture_id: LectureId,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl ProofTokenPayload {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expires_at
    }
}
