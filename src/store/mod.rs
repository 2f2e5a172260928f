//! Persistence gateway: a store hands out units of work, and every operation runs inside one.
//!
//! A unit of work is a storage transaction. `commit` makes its writes durable; dropping it
//! without committing rolls it back, so every exit path releases it.

mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::PgStudentStore;

use crate::error::AppError;
use crate::student::Student;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Returned by the create function when the routine rejected the insert.
pub const CREATE_FAILED: i64 = -1;

#[async_trait]
pub trait StudentStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, AppError>;

    /// Cheap round trip used by the readiness check.
    async fn ping(&self) -> Result<(), AppError>;
}

#[async_trait]
pub trait UnitOfWork: Send {
    /// Every row, in the store's natural order.
    async fn list_all(&mut self) -> Result<Vec<Student>, AppError>;

    async fn find_by_id(&mut self, id: i64) -> Result<Option<Student>, AppError>;

    /// Returns whether a row existed.
    async fn delete_by_id(&mut self, id: i64) -> Result<bool, AppError>;

    /// Writes every field of `student` back to the row with the same id.
    async fn merge_update(&mut self, student: &Student) -> Result<(), AppError>;

    /// Inserts through the stored procedure. The procedure reports no id.
    async fn call_create_procedure(&mut self, name: Option<&str>, balance: Decimal) -> Result<(), AppError>;

    /// Inserts through the stored function: the new id, or [`CREATE_FAILED`].
    async fn call_create_function(&mut self, name: Option<&str>, balance: Decimal) -> Result<i64, AppError>;

    async fn commit(self: Box<Self>) -> Result<(), AppError>;
}
