pub mod auth;
pub mod callback_query;
pub mod identity_response;
pub mod login_response;
