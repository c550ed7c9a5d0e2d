use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct QrCodeQuery {
    /// Overrides the configured token lifetime
    pub ttl_secs: Option<String>,
}
