pub mod admin;
pub mod attendance;
pub mod auth;
pub mod bounded;
pub mod error;
pub mod extractors;
pub mod params;
pub mod route_policies;
