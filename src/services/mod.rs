pub mod context;
pub mod todo_service;
pub mod validation;

pub use context::ServiceContext;
