use crate::EntityDescriptor;
use tracing::debug;

#[derive(derive_more::Debug)]
/// The data structure submitted by your Entity to the cleanup registry.
///
/// ```ignore
/// fn order_descriptor() -> EntityDescriptor {
///     EntityDescriptor::from_entity(order::Entity)
/// }
///
/// sea_orm_cleanup::register_entity! {
///     sea_orm_cleanup::CleanupEntity {
///         module_path: module_path!(),
///         descriptor: order_descriptor,
///     }
/// }
/// ```
pub struct CleanupEntity {
    /// Please use `module_path!()`.
    pub module_path: &'static str,
    /// Function that describes the Entity.
    #[debug(skip)]
    pub descriptor: fn() -> EntityDescriptor,
}

inventory::collect!(CleanupEntity);

/// Macro to register an Entity
pub use inventory::submit as register_entity;

impl CleanupEntity {
    /// Descriptors of all registered entities whose module path starts with `prefix`.
    ///
    /// A crate name may be given as prefix, `my-app` covers `my_app::*`. An
    /// empty prefix selects every registered entity. The order is whatever
    /// the linker left the registrations in.
    pub fn descriptors(prefix: &str) -> Vec<EntityDescriptor> {
        let prefix = normalize_prefix(prefix);
        debug!("Collecting entities with prefix `{prefix}`");

        let mut descriptors = Vec::new();
        for entity in inventory::iter::<CleanupEntity>() {
            if entity.module_path.starts_with(prefix.as_str()) {
                descriptors.push((entity.descriptor)());
                debug!("Registered {}", entity.module_path);
            } else {
                debug!("Skipped {}", entity.module_path);
            }
        }
        descriptors
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let prefix = prefix.trim_end_matches('*');
    if prefix.is_empty() {
        return String::new();
    }
    let prefix = if prefix.contains("::") {
        prefix.to_owned()
    } else {
        format!("{prefix}::")
    };
    match prefix.split_once("::") {
        // convert crate name to module path
        Some((left, right)) if left.contains('-') => {
            format!("{}::{right}", left.replace('-', "_"))
        }
        _ => prefix,
    }
}
