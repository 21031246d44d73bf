use crate::case::{table_name_for_type, type_name_of};
use sea_orm::{EntityTrait, IdenStatic, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait};

/// Name of the identity column assumed when an entity does not say otherwise
pub const DEFAULT_IDENTITY_COLUMN: &str = "id";

/// Whether an entity is backed by a table or a view
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A base table, it will be truncated
    #[default]
    Table,
    /// A view, it is never truncated
    View,
}

/// Everything needed to find the table behind one entity.
///
/// A descriptor either declares its table name explicitly, in which case the
/// name is used verbatim, or leaves it to the naming convention: the type
/// name converted from upper-camel-case to lower-snake-case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDescriptor {
    pub(crate) type_name: String,
    pub(crate) table_name: Option<String>,
    pub(crate) schema_name: Option<String>,
    pub(crate) identity_column: Option<String>,
    pub(crate) kind: EntityKind,
}

impl EntityDescriptor {
    /// Describe an entity by its type name, e.g. `ProductItem`
    pub fn new<T>(type_name: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            table_name: None,
            schema_name: None,
            identity_column: Some(DEFAULT_IDENTITY_COLUMN.to_owned()),
            kind: EntityKind::Table,
        }
    }

    /// Describe the Rust type `T` by its own name
    pub fn of<T: ?Sized>() -> Self {
        Self::new(type_name_of::<T>())
    }

    /// Describe a SeaORM entity.
    ///
    /// The table and schema name are taken from the entity. The identity
    /// column is its primary key column when the entity has a single,
    /// auto-incrementing primary key; otherwise no identity reset is done.
    pub fn from_entity<E>(entity: E) -> Self
    where
        E: EntityTrait,
    {
        let mut keys = E::PrimaryKey::iter();
        let identity_column = match (keys.next(), keys.next()) {
            (Some(key), None) if <E::PrimaryKey as PrimaryKeyTrait>::auto_increment() => {
                Some(key.into_column().as_str().to_owned())
            }
            _ => None,
        };

        Self {
            type_name: type_name_of::<E>(),
            table_name: Some(entity.table_name().to_owned()),
            schema_name: entity.schema_name().map(ToOwned::to_owned),
            identity_column,
            kind: EntityKind::Table,
        }
    }

    /// Same as [`EntityDescriptor::from_entity`] with the entity's default value
    pub fn from_entity_type<E>() -> Self
    where
        E: EntityTrait,
    {
        Self::from_entity(E::default())
    }

    /// Declare the table name explicitly
    pub fn table<T>(mut self, table_name: T) -> Self
    where
        T: Into<String>,
    {
        self.table_name = Some(table_name.into());
        self
    }

    /// Qualify the table with a schema
    pub fn schema<T>(mut self, schema_name: T) -> Self
    where
        T: Into<String>,
    {
        self.schema_name = Some(schema_name.into());
        self
    }

    /// Set the column whose counter restarts at 1
    pub fn identity_column<T>(mut self, column: T) -> Self
    where
        T: Into<String>,
    {
        self.identity_column = Some(column.into());
        self
    }

    /// The table has no identity counter to reset
    pub fn without_identity(mut self) -> Self {
        self.identity_column = None;
        self
    }

    /// Mark the entity as backed by a view
    pub fn view(mut self) -> Self {
        self.kind = EntityKind::View;
        self
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    pub fn get_identity_column(&self) -> Option<&str> {
        self.identity_column.as_deref()
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Whether the table name was declared explicitly
    pub fn has_table_declaration(&self) -> bool {
        self.table_name.is_some()
    }

    /// The declared table name, or the one derived from the type name
    pub fn resolved_table_name(&self) -> String {
        match &self.table_name {
            Some(table_name) => table_name.clone(),
            None => table_name_for_type(&self.type_name),
        }
    }
}
