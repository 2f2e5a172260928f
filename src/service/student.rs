//! StudentService: one unit of work per public method, entity→record mapping at the boundary.

use crate::error::AppError;
use crate::store::StudentStore;
use crate::student::{balance_or_zero, StudentRecord};
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    pub async fn ping(&self) -> Result<(), AppError> {
        self.store.ping().await
    }

    /// Every stored student in store order; absent balances read as zero.
    pub async fn list_students(&self) -> Result<Vec<StudentRecord>, AppError> {
        let mut uow = self.store.begin().await?;
        let students = uow.list_all().await?;
        uow.commit().await?;
        Ok(students.into_iter().map(StudentRecord::from).collect())
    }

    pub async fn get_student(&self, id: i64) -> Result<Option<StudentRecord>, AppError> {
        let mut uow = self.store.begin().await?;
        let student = uow.find_by_id(id).await?;
        uow.commit().await?;
        Ok(student.map(StudentRecord::from))
    }

    /// Inserts through the stored procedure. No id comes back on this path.
    pub async fn create_via_procedure(&self, input: &StudentRecord) -> Result<(), AppError> {
        let balance = balance_or_zero(input.balance);
        let mut uow = self.store.begin().await?;
        uow.call_create_procedure(input.name.as_deref(), balance).await?;
        uow.commit().await?;
        Ok(())
    }

    /// Inserts through the stored function and returns its result unchanged:
    /// the new id, or the negative sentinel when the routine refused the insert.
    pub async fn create_via_function(&self, input: &StudentRecord) -> Result<i64, AppError> {
        let balance = balance_or_zero(input.balance);
        let mut uow = self.store.begin().await?;
        let new_id = uow.call_create_function(input.name.as_deref(), balance).await?;
        if new_id < 0 {
            // Not committed: anything the routine wrote before refusing is rolled back.
            tracing::warn!(result = new_id, "create function reported failure");
            return Ok(new_id);
        }
        uow.commit().await?;
        Ok(new_id)
    }

    /// `true` iff a row existed and was removed.
    pub async fn delete_student(&self, id: i64) -> Result<bool, AppError> {
        let mut uow = self.store.begin().await?;
        let found = uow.delete_by_id(id).await?;
        uow.commit().await?;
        Ok(found)
    }

    /// Partial overwrite of an existing row; `false` and no write when it does not exist.
    pub async fn update_student(&self, id: i64, input: &StudentRecord) -> Result<bool, AppError> {
        let mut uow = self.store.begin().await?;
        let Some(mut student) = uow.find_by_id(id).await? else {
            return Ok(false);
        };
        student.apply_update(input);
        uow.merge_update(&student).await?;
        uow.commit().await?;
        Ok(true)
    }
}
