//! Lecture-scoped proof-of-presence tokens.
//!
//! A token is `base64url(payload json) "." base64url(signature)`, where the
//! signature is HMAC-SHA256 over the payload bytes under a key derived per
//! tenant from the service signing secret. Validity is computed from the
//! token alone; nothing is stored server-side.

pub mod codec;
pub mod error;
pub mod payload;
pub mod qr;

pub use codec::{IssuedToken, ProofTokenCodec};
pub use error::{Result, TokenError};
pub use payload::ProofTokenPayload;
pub use qr::render_svg;

#[cfg(test)]
mod tests;
