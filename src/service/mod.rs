//! StudentService: record-level operations over a student store.

mod student;
pub use student::StudentService;
