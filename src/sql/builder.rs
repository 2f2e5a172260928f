//! Renders the statements the PostgreSQL store runs.
//! Identifiers come from validated config only; values are always bound parameters.

use crate::config::StoreNames;

const COLUMNS: &str = "id::BIGINT AS id, name, major, gpa::DOUBLE PRECISION AS gpa, birth_date, balance";

/// Statement text for one table and its two create routines, rendered once at startup.
#[derive(Clone, Debug)]
pub struct StudentSql {
    pub select_all: String,
    pub select_by_id: String,
    pub delete_by_id: String,
    pub update_by_id: String,
    pub call_procedure: String,
    pub call_function: String,
}

impl StudentSql {
    pub fn new(names: &StoreNames) -> Self {
        let table = &names.table;
        // Ids are server-assigned, so the routines always receive an untyped NULL for
        // their id argument and overload resolution follows the routine's own signature.
        StudentSql {
            select_all: format!("SELECT {} FROM {}", COLUMNS, table),
            select_by_id: format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, table),
            delete_by_id: format!("DELETE FROM {} WHERE id = $1", table),
            update_by_id: format!(
                "UPDATE {} SET name = $2, major = $3, gpa = $4, birth_date = $5, balance = $6 WHERE id = $1",
                table
            ),
            call_procedure: format!("CALL {}(NULL, $1, $2)", names.procedure),
            call_function: format!("SELECT {}(NULL, $1, $2)::BIGINT", names.function),
        }
    }
}
