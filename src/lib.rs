#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    missing_debug_implementations,
    clippy::print_stderr,
    clippy::print_stdout
)]

//! # SeaORM Cleanup
//!
//! Reset a database to a clean state between test runs.
//!
//! The tables to clean are resolved once from a set of entity descriptors:
//! entities that declare a table name keep it, the others are named after
//! their type, `ProductItem` becoming `product_item`. Every cleanup then, in
//! a single transaction, turns referential-integrity checks off, truncates
//! each table, restarts its identity counter at 1 and turns the checks back on.
//!
//! ```ignore
//! use sea_orm_cleanup::{DatabaseCleanup, EntityDescriptor};
//!
//! let cleanup = DatabaseCleanup::new([
//!     EntityDescriptor::from_entity(order::Entity),
//!     EntityDescriptor::new("ProductItem"),
//! ]);
//!
//! cleanup.execute(&db).await?;
//! ```
//!
//! [`DatabaseCleanup::planned_statements`] shows what a cleanup will send. It
//! is a plan, not a log: on SQLite the identity resets it lists are skipped
//! when the database has no `sqlite_sequence` table.
//!
//! With the `entity-registry` feature, entities can register themselves with
//! [`register_entity!`] and be collected by module path prefix through
//! [`DatabaseCleanup::from_registry`].

mod case;
mod cleanup;
mod descriptor;
mod dialect;
pub mod error;
mod options;
#[cfg(feature = "entity-registry")]
mod registry;
mod resolver;
#[doc(hidden)]
#[cfg(any(test, feature = "tests-cfg"))]
pub mod tests_cfg;

pub use case::*;
pub use cleanup::*;
pub use descriptor::*;
pub use dialect::*;
pub use error::*;
pub use options::*;
#[cfg(feature = "entity-registry")]
pub use registry::*;
pub use resolver::*;

pub use sea_orm;
