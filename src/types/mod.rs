pub mod code;
pub mod error;
pub mod friend;
pub mod member;
