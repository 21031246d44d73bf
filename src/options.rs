use crate::Dialect;

/// Options for resolving and cleaning tables
#[derive(Clone, Debug)]
pub struct CleanupOptions {
    pub(crate) dialect: Option<Dialect>,
    pub(crate) reset_identity: bool,
    pub(crate) exclude: Vec<String>,
    pub(crate) log_statements: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CleanupOptions {
    /// Create new [CleanupOptions] with the defaults: dialect taken from the
    /// connection, identity reset on, statement logging on, nothing excluded
    pub fn new() -> Self {
        Self {
            dialect: None,
            reset_identity: true,
            exclude: Vec::new(),
            log_statements: true,
        }
    }

    /// Use the statements of `dialect` regardless of the connection's backend
    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.dialect = Some(dialect);
        self
    }

    /// Get the dialect override, if set
    pub fn get_dialect(&self) -> Option<Dialect> {
        self.dialect
    }

    /// Restart identity counters at 1 after truncation (default true)
    pub fn reset_identity(&mut self, value: bool) -> &mut Self {
        self.reset_identity = value;
        self
    }

    /// Get whether identity counters are restarted
    pub fn get_reset_identity(&self) -> bool {
        self.reset_identity
    }

    /// Never truncate `table`. Matches either the bare or the schema qualified name.
    pub fn exclude<T>(&mut self, table: T) -> &mut Self
    where
        T: Into<String>,
    {
        self.exclude.push(table.into());
        self
    }

    /// Never truncate any of `tables`
    pub fn exclude_tables<I, T>(&mut self, tables: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.exclude.extend(tables.into_iter().map(Into::into));
        self
    }

    /// Get the excluded tables
    pub fn get_exclude(&self) -> &[String] {
        &self.exclude
    }

    /// Log every statement at `DEBUG` level (default true)
    pub fn log_statements(&mut self, value: bool) -> &mut Self {
        self.log_statements = value;
        self
    }

    /// Get whether statements are logged
    pub fn get_log_statements(&self) -> bool {
        self.log_statements
    }

    pub(crate) fn is_excluded(&self, schema: Option<&str>, table: &str) -> bool {
        self.exclude.iter().any(|excluded| {
            excluded == table
                || schema.is_some_and(|schema| {
                    excluded
                        .split_once('.')
                        .is_some_and(|(s, t)| s == schema && t == table)
                })
        })
    }
}
