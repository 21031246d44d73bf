use sea_orm::DbErr;
use thiserror::Error;

/// An error from an unsuccessful cleanup
#[derive(Error, Debug)]
pub enum CleanupError {
    /// A native statement failed; the remaining steps were not executed
    #[error("Failed to execute `{sql}`{}: {source}", table_context(.table))]
    Statement {
        /// The SQL that was sent
        sql: String,
        /// The table the statement was issued for, if any
        table: Option<String>,
        /// Error reported by the database
        #[source]
        source: DbErr,
    },
    /// The surrounding transaction could not be started or committed
    #[error("Cleanup transaction failed: {0}")]
    Transaction(#[source] DbErr),
}

impl CleanupError {
    /// The table being cleaned when the error happened
    pub fn table(&self) -> Option<&str> {
        match self {
            Self::Statement { table, .. } => table.as_deref(),
            Self::Transaction(_) => None,
        }
    }
}

fn table_context(table: &Option<String>) -> String {
    match table {
        Some(table) => format!(" on table `{table}`"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_statement_error_message() {
        let err = CleanupError::Statement {
            sql: "TRUNCATE TABLE ghost".to_owned(),
            table: Some("ghost".to_owned()),
            source: DbErr::Custom("no such table".to_owned()),
        };
        assert_eq!(err.table(), Some("ghost"));
        assert_eq!(
            err.to_string(),
            "Failed to execute `TRUNCATE TABLE ghost` on table `ghost`: Custom Error: no such table"
        );

        let err = CleanupError::Statement {
            sql: "SET REFERENTIAL_INTEGRITY FALSE".to_owned(),
            table: None,
            source: DbErr::Custom("denied".to_owned()),
        };
        assert_eq!(err.table(), None);
        assert_eq!(
            err.to_string(),
            "Failed to execute `SET REFERENTIAL_INTEGRITY FALSE`: Custom Error: denied"
        );
    }
}
