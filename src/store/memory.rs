//! In-process store with the same observable semantics as the PostgreSQL one.
//! Units of work are serialized by a lock and operate on a private copy of the table
//! that is published only on commit.

use crate::error::AppError;
use crate::store::{StudentStore, UnitOfWork, CREATE_FAILED};
use crate::student::Student;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Clone, Debug, Default)]
struct Table {
    rows: BTreeMap<i64, Student>,
    last_id: i64,
}

impl Table {
    fn insert(&mut self, name: Option<&str>, balance: Decimal) -> i64 {
        self.last_id += 1;
        let id = self.last_id;
        self.rows.insert(
            id,
            Student {
                id,
                name: name.map(str::to_string),
                major: None,
                gpa: None,
                birth_date: None,
                balance: Some(balance),
            },
        );
        id
    }
}

#[derive(Clone, Default)]
pub struct MemoryStudentStore {
    table: Arc<Mutex<Table>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `rows` as given (their ids and absent fields are kept).
    pub fn with_rows(rows: impl IntoIterator<Item = Student>) -> Self {
        let mut table = Table::default();
        for row in rows {
            table.last_id = table.last_id.max(row.id);
            table.rows.insert(row.id, row);
        }
        Self {
            table: Arc::new(Mutex::new(table)),
        }
    }

    /// Committed rows, in id order.
    pub async fn snapshot(&self) -> Vec<Student> {
        self.table.lock().await.rows.values().cloned().collect()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn begin(&self) -> Result<Box<dyn UnitOfWork>, AppError> {
        let committed = Arc::clone(&self.table).lock_owned().await;
        let working = (*committed).clone();
        Ok(Box::new(MemoryUnitOfWork { committed, working }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

struct MemoryUnitOfWork {
    committed: OwnedMutexGuard<Table>,
    working: Table,
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn list_all(&mut self) -> Result<Vec<Student>, AppError> {
        Ok(self.working.rows.values().cloned().collect())
    }

    async fn find_by_id(&mut self, id: i64) -> Result<Option<Student>, AppError> {
        Ok(self.working.rows.get(&id).cloned())
    }

    async fn delete_by_id(&mut self, id: i64) -> Result<bool, AppError> {
        Ok(self.working.rows.remove(&id).is_some())
    }

    async fn merge_update(&mut self, student: &Student) -> Result<(), AppError> {
        if let Some(row) = self.working.rows.get_mut(&student.id) {
            *row = student.clone();
        }
        Ok(())
    }

    async fn call_create_procedure(&mut self, name: Option<&str>, balance: Decimal) -> Result<(), AppError> {
        self.working.insert(name, balance);
        Ok(())
    }

    async fn call_create_function(&mut self, name: Option<&str>, balance: Decimal) -> Result<i64, AppError> {
        // Rejects a missing or blank name the way a validating routine would.
        match name.filter(|n| !n.trim().is_empty()) {
            Some(name) => Ok(self.working.insert(Some(name), balance)),
            None => Ok(CREATE_FAILED),
        }
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        let MemoryUnitOfWork { mut committed, working } = *self;
        *committed = working;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn dropped_unit_of_work_rolls_back() {
        let store = MemoryStudentStore::new();
        {
            let mut uow = store.begin().await.unwrap();
            uow.call_create_procedure(Some("Budi"), Decimal::ZERO).await.unwrap();
            assert_eq!(uow.list_all().await.unwrap().len(), 1);
        }
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn committed_writes_are_visible_to_the_next_unit() {
        let store = MemoryStudentStore::new();
        let mut uow = store.begin().await.unwrap();
        let id = uow.call_create_function(Some("Siti"), Decimal::new(10, 0)).await.unwrap();
        uow.commit().await.unwrap();

        let mut uow = store.begin().await.unwrap();
        let found = uow.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Siti"));
        assert_eq!(found.balance, Some(Decimal::new(10, 0)));
    }

    #[tokio::test]
    async fn function_rejects_blank_name() {
        let store = MemoryStudentStore::new();
        let mut uow = store.begin().await.unwrap();
        assert_eq!(uow.call_create_function(Some("  "), Decimal::ZERO).await.unwrap(), CREATE_FAILED);
        assert_eq!(uow.call_create_function(None, Decimal::ZERO).await.unwrap(), CREATE_FAILED);
        assert!(uow.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_continue_after_seeded_rows() {
        let store = MemoryStudentStore::with_rows([Student {
            id: 41,
            name: Some("Seed".into()),
            major: None,
            gpa: None,
            birth_date: None,
            balance: None,
        }]);
        let mut uow = store.begin().await.unwrap();
        let id = uow.call_create_function(Some("Next"), Decimal::ZERO).await.unwrap();
        assert_eq!(id, 42);
    }
}
