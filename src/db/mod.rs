pub mod database_service;
pub mod friend;
pub mod member;
pub mod plan;
