pub mod authorized;
pub mod session_token;
