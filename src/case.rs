//! Naming convention for entities without a table declaration

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Derive a table name from a Rust type name, `ProductItem` becomes `product_item`.
///
/// Any module path and generic arguments are stripped before the
/// upper-camel-case name is converted to lower-snake-case.
pub fn table_name_for_type(type_name: &str) -> String {
    bare_type_name(type_name).to_snake_case()
}

/// Name of `T` as it would be written in its own module.
///
/// SeaORM entities are all called `Entity`, so for those the name of the
/// enclosing module is used instead: `app::product_item::Entity` yields
/// `ProductItem`.
pub fn type_name_of<T: ?Sized>() -> String {
    let full = strip_generics(std::any::type_name::<T>());
    let mut segments = full.rsplit("::");
    let last = segments.next().unwrap_or(full);
    match (last, segments.next()) {
        ("Entity", Some(module)) => module.to_upper_camel_case(),
        _ => last.to_owned(),
    }
}

fn bare_type_name(type_name: &str) -> &str {
    let name = strip_generics(type_name);
    name.rsplit("::").next().unwrap_or(name)
}

fn strip_generics(type_name: &str) -> &str {
    match type_name.find('<') {
        Some(idx) => &type_name[..idx],
        None => type_name,
    }
}
