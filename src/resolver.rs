use crate::{CleanupOptions, EntityDescriptor, EntityKind};
use tracing::debug;

/// A table that will be cleaned
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTable {
    /// Schema the table lives in, if qualified
    pub schema: Option<String>,
    /// Table name
    pub name: String,
    /// Column whose counter restarts at 1
    pub identity_column: Option<String>,
}

impl ResolvedTable {
    /// `schema.name`, or just `name` when unqualified
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Ordered list of tables: declared names first, convention names second.
///
/// Built once and never modified afterwards. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableNames {
    tables: Vec<ResolvedTable>,
}

impl TableNames {
    pub fn tables(&self) -> &[ResolvedTable] {
        &self.tables
    }

    /// Qualified names in cleanup order
    pub fn names(&self) -> Vec<String> {
        self.tables.iter().map(ResolvedTable::qualified_name).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Turns entity descriptors into the list of tables to clean
#[derive(Debug)]
pub struct TableResolver<'a> {
    options: &'a CleanupOptions,
}

impl<'a> TableResolver<'a> {
    pub fn new(options: &'a CleanupOptions) -> Self {
        Self { options }
    }

    /// Resolve the table of every descriptor.
    ///
    /// Views are skipped, as are tables excluded in the options. Tables of
    /// descriptors declaring their name come first, in input order, followed
    /// by the tables named after their type, also in input order.
    pub fn resolve<I>(&self, descriptors: I) -> TableNames
    where
        I: IntoIterator<Item = EntityDescriptor>,
    {
        let (declared, derived): (Vec<_>, Vec<_>) = descriptors
            .into_iter()
            .filter(|descriptor| {
                if descriptor.kind == EntityKind::View {
                    debug!("Skipped view entity `{}`", descriptor.type_name);
                    return false;
                }
                true
            })
            .partition(EntityDescriptor::has_table_declaration);

        let tables = declared
            .into_iter()
            .chain(derived)
            .filter_map(|descriptor| self.resolve_one(descriptor))
            .collect();

        TableNames { tables }
    }

    fn resolve_one(&self, descriptor: EntityDescriptor) -> Option<ResolvedTable> {
        let name = descriptor.resolved_table_name();
        if self
            .options
            .is_excluded(descriptor.schema_name.as_deref(), &name)
        {
            debug!("Skipped excluded table `{name}`");
            return None;
        }
        debug!(
            "Resolved entity `{}` to table `{}`",
            descriptor.type_name, name
        );
        Some(ResolvedTable {
            schema: descriptor.schema_name,
            name,
            identity_column: descriptor.identity_column,
        })
    }
}
