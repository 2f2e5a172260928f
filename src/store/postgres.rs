//! PostgreSQL store: one `sqlx` transaction per unit of work.

use crate::config::StoreNames;
use crate::error::AppError;
use crate::sql::StudentSql;
use crate::store::{StudentStore, UnitOfWork, CREATE_FAILED};
use crate::student::Student;
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
    sql: Arc<StudentSql>,
}

impl PgStudentStore {
    /// `names` must already be validated; they are spliced into statement text.
    pub fn new(pool: PgPool, names: &StoreNames) -> Self {
        Self {
            pool,
            sql: Arc::new(StudentSql::new(names)),
        }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, AppError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgUnitOfWork {
            tx,
            sql: Arc::clone(&self.sql),
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

struct PgUnitOfWork {
    tx: Transaction<'static, Postgres>,
    sql: Arc<StudentSql>,
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn list_all(&mut self) -> Result<Vec<Student>, AppError> {
        tracing::debug!(sql = %self.sql.select_all, "query");
        let rows = sqlx::query_as::<_, Student>(&self.sql.select_all)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(&mut self, id: i64) -> Result<Option<Student>, AppError> {
        tracing::debug!(sql = %self.sql.select_by_id, id, "query");
        let row = sqlx::query_as::<_, Student>(&self.sql.select_by_id)
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row)
    }

    async fn delete_by_id(&mut self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(sql = %self.sql.delete_by_id, id, "query");
        let result = sqlx::query(&self.sql.delete_by_id)
            .bind(id)
            .execute(&mut *self.tx)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn merge_update(&mut self, student: &Student) -> Result<(), AppError> {
        tracing::debug!(sql = %self.sql.update_by_id, id = student.id, "query");
        sqlx::query(&self.sql.update_by_id)
            .bind(student.id)
            .bind(student.name.as_deref())
            .bind(student.major.as_deref())
            .bind(student.gpa)
            .bind(student.birth_date)
            .bind(student.balance)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn call_create_procedure(&mut self, name: Option<&str>, balance: Decimal) -> Result<(), AppError> {
        tracing::debug!(sql = %self.sql.call_procedure, "call");
        sqlx::query(&self.sql.call_procedure)
            .bind(name)
            .bind(balance)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn call_create_function(&mut self, name: Option<&str>, balance: Decimal) -> Result<i64, AppError> {
        tracing::debug!(sql = %self.sql.call_function, "call");
        let id: Option<i64> = sqlx::query_scalar(&self.sql.call_function)
            .bind(name)
            .bind(balance)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(id.unwrap_or(CREATE_FAILED))
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
