use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Identity provider's browser login flow
    pub login_url: String,
}
