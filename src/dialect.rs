use crate::ResolvedTable;
use sea_orm::{
    DbBackend, Statement,
    sea_query::{Alias, Expr, Iden, IntoTableRef, Query, QuotedBuilder, Table, TableRef},
};

/// The family of native statements used to clean a database
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// H2 and HSQLDB: a session-wide `REFERENTIAL_INTEGRITY` switch and
    /// `ALTER COLUMN .. RESTART WITH 1`. Identifiers are sent unquoted.
    H2,
    /// MySQL and MariaDB: `FOREIGN_KEY_CHECKS` and `AUTO_INCREMENT = 1`
    MySql,
    /// PostgreSQL: one `TRUNCATE` covering every table, no integrity switch
    Postgres,
    /// SQLite: deferred foreign keys, `DELETE` and `sqlite_sequence`
    Sqlite,
}

impl From<DbBackend> for Dialect {
    fn from(backend: DbBackend) -> Self {
        match backend {
            DbBackend::MySql => Self::MySql,
            DbBackend::Postgres => Self::Postgres,
            DbBackend::Sqlite => Self::Sqlite,
        }
    }
}

impl Dialect {
    /// The backend whose query builder renders this dialect; `None` for H2
    pub fn backend(&self) -> Option<DbBackend> {
        match self {
            Self::H2 => None,
            Self::MySql => Some(DbBackend::MySql),
            Self::Postgres => Some(DbBackend::Postgres),
            Self::Sqlite => Some(DbBackend::Sqlite),
        }
    }

    /// Statement turning referential-integrity enforcement off.
    ///
    /// `backend` is the backend of the connection the statements are sent on.
    /// It is only used by dialects without a query builder of their own.
    pub fn disable_integrity(&self, backend: DbBackend) -> Option<Statement> {
        let sql = match self {
            Self::H2 => "SET REFERENTIAL_INTEGRITY FALSE",
            Self::MySql => "SET FOREIGN_KEY_CHECKS = 0",
            Self::Postgres => return None,
            // `PRAGMA foreign_keys` is a no-op inside a transaction, deferring is not
            Self::Sqlite => "PRAGMA defer_foreign_keys = ON",
        };
        Some(self.raw(backend, sql))
    }

    /// Statement turning referential-integrity enforcement back on
    pub fn enable_integrity(&self, backend: DbBackend) -> Option<Statement> {
        let sql = match self {
            Self::H2 => "SET REFERENTIAL_INTEGRITY TRUE",
            Self::MySql => "SET FOREIGN_KEY_CHECKS = 1",
            // deferred checks run on commit
            Self::Postgres | Self::Sqlite => return None,
        };
        Some(self.raw(backend, sql))
    }

    /// Whether one statement truncates every table at once.
    ///
    /// PostgreSQL refuses to truncate a referenced table on its own, unless
    /// the referencing tables are truncated by the same statement.
    pub fn truncates_together(&self) -> bool {
        matches!(self, Self::Postgres)
    }

    /// Statement removing every row of `table`
    pub fn truncate(&self, backend: DbBackend, table: &ResolvedTable) -> Statement {
        match self {
            Self::H2 => self.raw(
                backend,
                format!("TRUNCATE TABLE {}", table.qualified_name()),
            ),
            Self::MySql | Self::Postgres => self
                .builder(backend)
                .build(&Table::truncate().table(table_ref(table)).to_owned()),
            Self::Sqlite => self
                .builder(backend)
                .build(&Query::delete().from_table(table_ref(table)).to_owned()),
        }
    }

    /// Statement removing every row of all `tables`, restarting the counters
    /// of their identity columns when `reset_identity` is set.
    ///
    /// Only PostgreSQL can do so in one statement, see
    /// [`Dialect::truncates_together`]. Returns `None` for an empty list.
    pub fn truncate_all(
        &self,
        backend: DbBackend,
        tables: &[ResolvedTable],
        reset_identity: bool,
    ) -> Option<Statement> {
        if tables.is_empty() || !self.truncates_together() {
            return None;
        }
        let names: Vec<_> = tables
            .iter()
            .map(|table| quote_table(DbBackend::Postgres, table))
            .collect();
        let mut sql = format!("TRUNCATE TABLE {}", names.join(", "));
        if reset_identity && tables.iter().any(|table| table.identity_column.is_some()) {
            sql.push_str(" RESTART IDENTITY");
        }
        Some(self.raw(backend, sql))
    }

    /// Statement restarting the identity counter of `table` at 1, if it has one
    /// and the truncate statement does not already do so
    pub fn reset_identity(
        &self,
        backend: DbBackend,
        table: &ResolvedTable,
    ) -> Option<Statement> {
        let column = table.identity_column.as_deref()?;
        match self {
            Self::H2 => Some(self.raw(
                backend,
                format!(
                    "ALTER TABLE {} ALTER COLUMN {} RESTART WITH 1",
                    table.qualified_name(),
                    column.to_uppercase()
                ),
            )),
            Self::MySql => Some(self.raw(
                backend,
                format!(
                    "ALTER TABLE {} AUTO_INCREMENT = 1",
                    quote_table(DbBackend::MySql, table)
                ),
            )),
            Self::Postgres => None,
            Self::Sqlite => {
                let sequence = match &table.schema {
                    Some(schema) => {
                        (Alias::new(schema), Alias::new("sqlite_sequence")).into_table_ref()
                    }
                    None => Alias::new("sqlite_sequence").into_table_ref(),
                };
                Some(
                    self.builder(backend).build(
                        &Query::delete()
                            .from_table(sequence)
                            .and_where(Expr::col(Alias::new("name")).eq(table.name.as_str()))
                            .to_owned(),
                    ),
                )
            }
        }
    }

    /// Query that returns a row when identity resets can be issued.
    ///
    /// SQLite only creates `sqlite_sequence` once some table uses `AUTOINCREMENT`.
    pub fn identity_probe(&self) -> Option<Statement> {
        match self {
            Self::Sqlite => Some(
                DbBackend::Sqlite.build(
                    &Query::select()
                        .column(Alias::new("name"))
                        .from(Alias::new("sqlite_master"))
                        .and_where(Expr::col(Alias::new("type")).eq("table"))
                        .and_where(Expr::col(Alias::new("name")).eq("sqlite_sequence"))
                        .to_owned(),
                ),
            ),
            Self::H2 | Self::MySql | Self::Postgres => None,
        }
    }

    fn builder(&self, backend: DbBackend) -> DbBackend {
        self.backend().unwrap_or(backend)
    }

    fn raw<S>(&self, backend: DbBackend, sql: S) -> Statement
    where
        S: Into<String>,
    {
        Statement::from_string(self.builder(backend), sql)
    }
}

fn table_ref(table: &ResolvedTable) -> TableRef {
    match &table.schema {
        Some(schema) => (Alias::new(schema), Alias::new(&table.name)).into_table_ref(),
        None => Alias::new(&table.name).into_table_ref(),
    }
}

/// `table` quoted the way the query builder of `backend` quotes identifiers
fn quote_table(backend: DbBackend, table: &ResolvedTable) -> String {
    let quote = backend.get_query_builder().quote();
    let mut sql = String::new();
    if let Some(schema) = &table.schema {
        Alias::new(schema).prepare(&mut sql, quote);
        sql.push('.');
    }
    Alias::new(&table.name).prepare(&mut sql, quote);
    sql
}
