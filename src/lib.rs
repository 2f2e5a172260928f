//! Student records: REST backend over PostgreSQL with stored-routine write paths.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod student;

pub use config::{AppConfig, StoreNames};
pub use error::{AppError, ConfigError};
pub use response::ApiResponse;
pub use routes::{app, common_routes, student_routes};
pub use service::StudentService;
pub use state::AppState;
pub use store::{MemoryStudentStore, PgStudentStore, StudentStore, UnitOfWork, CREATE_FAILED};
pub use student::{Student, StudentRecord};
