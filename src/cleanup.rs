use crate::{
    CleanupError, CleanupOptions, Dialect, EntityDescriptor, ResolvedTable, TableNames,
    TableResolver,
};
use sea_orm::{ConnectionTrait, DbBackend, Statement, TransactionTrait};
use tracing::{debug, info, instrument};

/// Cleanup result
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CleanupResult {
    /// Number of tables being truncated
    pub tables_truncated: usize,
    /// Number of rows removed, as reported by the driver.
    /// `TRUNCATE` reports 0 on most backends.
    pub rows_affected: u64,
}

/// Empties every table of a set of entities, typically between test cases.
///
/// The table list is resolved once, when the value is constructed, and never
/// changes afterwards. Keep one value for the whole test run:
///
/// ```ignore
/// static CLEANUP: LazyLock<DatabaseCleanup> =
///     LazyLock::new(|| DatabaseCleanup::from_registry("my-app"));
///
/// CLEANUP.execute(&db).await?;
/// ```
#[derive(Clone, Debug)]
pub struct DatabaseCleanup {
    tables: TableNames,
    options: CleanupOptions,
}

impl DatabaseCleanup {
    /// Resolve the tables of `descriptors` with default options
    pub fn new<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = EntityDescriptor>,
    {
        Self::with_options(descriptors, CleanupOptions::new())
    }

    /// Resolve the tables of `descriptors`
    pub fn with_options<I>(descriptors: I, options: CleanupOptions) -> Self
    where
        I: IntoIterator<Item = EntityDescriptor>,
    {
        let tables = TableResolver::new(&options).resolve(descriptors);
        debug!("Resolved {} tables for cleanup", tables.len());
        Self { tables, options }
    }

    /// Resolve the tables of every entity registered under `prefix`,
    /// see [`CleanupEntity::descriptors`](crate::CleanupEntity::descriptors)
    #[cfg(feature = "entity-registry")]
    pub fn from_registry(prefix: &str) -> Self {
        Self::from_registry_with_options(prefix, CleanupOptions::new())
    }

    /// Same as [`DatabaseCleanup::from_registry`] with custom options
    #[cfg(feature = "entity-registry")]
    pub fn from_registry_with_options(prefix: &str, options: CleanupOptions) -> Self {
        Self::with_options(crate::CleanupEntity::descriptors(prefix), options)
    }

    /// Tables in cleanup order
    pub fn tables(&self) -> &[ResolvedTable] {
        self.tables.tables()
    }

    /// Qualified table names in cleanup order
    pub fn table_names(&self) -> Vec<String> {
        self.tables.names()
    }

    pub fn options(&self) -> &CleanupOptions {
        &self.options
    }

    /// Dialect used on a connection of `backend`
    pub fn dialect(&self, backend: DbBackend) -> Dialect {
        self.options.dialect.unwrap_or_else(|| Dialect::from(backend))
    }

    /// The statements a cleanup plans to send on a connection of `backend`.
    ///
    /// This is the plan before the connection is consulted: SQLite identity
    /// resets are listed even though [`DatabaseCleanup::execute`] drops them
    /// when `sqlite_sequence` does not exist.
    pub fn planned_statements(&self, backend: DbBackend) -> Vec<Statement> {
        self.plan(self.dialect(backend), backend, self.options.reset_identity)
            .into_iter()
            .map(|step| step.stmt)
            .collect()
    }

    /// Empty every table inside a transaction of its own.
    ///
    /// SeaORM sends writes as they are made, so everything written through `db`
    /// before this call is visible to the cleanup. When `db` is already a
    /// transaction, the cleanup runs in a nested one (a savepoint).
    ///
    /// On error the transaction is rolled back and no further statement is
    /// sent. Session settings such as MySQL's `FOREIGN_KEY_CHECKS` are not
    /// covered by the rollback; restoring them is up to the caller.
    #[instrument(level = "debug", skip_all)]
    pub async fn execute<C>(&self, db: &C) -> Result<CleanupResult, CleanupError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = db.begin().await.map_err(CleanupError::Transaction)?;
        let res = self.execute_in(&txn).await?;
        txn.commit().await.map_err(CleanupError::Transaction)?;
        Ok(res)
    }

    /// Empty every table using `db` as it is, without starting a transaction
    #[instrument(level = "debug", skip_all)]
    pub async fn execute_in<C>(&self, db: &C) -> Result<CleanupResult, CleanupError>
    where
        C: ConnectionTrait,
    {
        let backend = db.get_database_backend();
        let dialect = self.dialect(backend);
        info!(
            "Cleaning {} tables with {:?} statements",
            self.tables.len(),
            dialect
        );

        let reset_identity =
            self.options.reset_identity && self.can_reset_identity(db, dialect).await?;

        let mut res = CleanupResult::default();
        for step in self.plan(dialect, backend, reset_identity) {
            let rows_affected = self.exec(db, step.stmt, step.table).await?;
            if step.tables_truncated > 0 {
                res.tables_truncated += step.tables_truncated;
                res.rows_affected += rows_affected;
            }
        }

        info!(
            "Cleaned {} tables, {} rows removed",
            res.tables_truncated, res.rows_affected
        );
        Ok(res)
    }

    /// Integrity off, then per table truncate and reset, then integrity on
    fn plan(&self, dialect: Dialect, backend: DbBackend, reset_identity: bool) -> Vec<Step> {
        let tables = self.tables.tables();
        let mut steps = Vec::new();
        steps.extend(dialect.disable_integrity(backend).map(Step::session));

        if dialect.truncates_together() {
            steps.extend(
                dialect
                    .truncate_all(backend, tables, reset_identity)
                    .map(|stmt| Step {
                        stmt,
                        table: None,
                        tables_truncated: tables.len(),
                    }),
            );
        } else {
            for table in tables {
                let name = table.qualified_name();
                steps.push(Step {
                    stmt: dialect.truncate(backend, table),
                    table: Some(name.clone()),
                    tables_truncated: 1,
                });
                if reset_identity {
                    steps.extend(dialect.reset_identity(backend, table).map(|stmt| Step {
                        stmt,
                        table: Some(name.clone()),
                        tables_truncated: 0,
                    }));
                }
            }
        }

        steps.extend(dialect.enable_integrity(backend).map(Step::session));
        steps
    }

    async fn can_reset_identity<C>(
        &self,
        db: &C,
        dialect: Dialect,
    ) -> Result<bool, CleanupError>
    where
        C: ConnectionTrait,
    {
        let probe = match dialect.identity_probe() {
            Some(probe) => probe,
            None => return Ok(true),
        };
        if self.tables.is_empty() {
            return Ok(false);
        }
        let sql = probe.to_string();
        let row = db
            .query_one(probe)
            .await
            .map_err(|source| CleanupError::Statement {
                sql,
                table: None,
                source,
            })?;
        if row.is_none() {
            debug!("No identity counters to reset");
        }
        Ok(row.is_some())
    }

    async fn exec<C>(
        &self,
        db: &C,
        stmt: Statement,
        table: Option<String>,
    ) -> Result<u64, CleanupError>
    where
        C: ConnectionTrait,
    {
        let sql = stmt.to_string();
        match &table {
            Some(table) => debug!("Cleaning table '{}'", table),
            None => debug!("Running session statement"),
        }
        if self.options.log_statements {
            debug!("{}", sql);
        }
        match db.execute(stmt).await {
            Ok(res) => Ok(res.rows_affected()),
            Err(source) => Err(CleanupError::Statement { sql, table, source }),
        }
    }
}

/// One statement of a cleanup
#[derive(Debug)]
struct Step {
    stmt: Statement,
    /// Table named in the error, when the statement concerns a single table
    table: Option<String>,
    tables_truncated: usize,
}

impl Step {
    fn session(stmt: Statement) -> Self {
        Self {
            stmt,
            table: None,
            tables_truncated: 0,
        }
    }
}
