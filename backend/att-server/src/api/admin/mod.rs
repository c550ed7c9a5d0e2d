pub mod relation_request;
pub mod relation_response;
pub mod relations;
