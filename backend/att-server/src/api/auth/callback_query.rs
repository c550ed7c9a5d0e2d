use serde::Deserialize;

/// `?session_token=` fallback for providers that redirect with the token in the URL
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    pub session_token: Option<String>,
}
