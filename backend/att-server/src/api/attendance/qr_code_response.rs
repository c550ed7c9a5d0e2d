use att_token::IssuedToken;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QrCodeResponse {
    pub token: String,
    pub qr_svg: String,
    pub course_id: i64,
    pub lecture_id: i64,
    /// Unix seconds
    pub issued_at: i64,
    pub expires_at: i64,
}

impl From<IssuedToken> for QrCodeResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            qr_svg: issued.qr_svg,
            course_id: issued.payload.course_id,
            lecture_id: issued.payload.lecture_id,
            issued_at: issued.payload.issued_at,
            expires_at: issued.payload.expires_at,
        }
    }
}
