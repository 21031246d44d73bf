pub mod category;
pub mod order;
pub mod order_line;
pub mod product_item;
pub mod seed_data;

use sea_orm_cleanup::{CleanupEntity, EntityDescriptor};

pub use seed_data::*;

fn category_descriptor() -> EntityDescriptor {
    EntityDescriptor::from_entity(category::Entity)
}

fn order_descriptor() -> EntityDescriptor {
    EntityDescriptor::from_entity(order::Entity)
}

fn order_line_descriptor() -> EntityDescriptor {
    EntityDescriptor::from_entity(order_line::Entity)
}

fn product_item_descriptor() -> EntityDescriptor {
    EntityDescriptor::new("ProductItem")
}

sea_orm_cleanup::register_entity! {
    CleanupEntity {
        module_path: module_path!(),
        descriptor: category_descriptor,
    }
}

sea_orm_cleanup::register_entity! {
    CleanupEntity {
        module_path: module_path!(),
        descriptor: order_descriptor,
    }
}

sea_orm_cleanup::register_entity! {
    CleanupEntity {
        module_path: module_path!(),
        descriptor: order_line_descriptor,
    }
}

sea_orm_cleanup::register_entity! {
    CleanupEntity {
        module_path: module_path!(),
        descriptor: product_item_descriptor,
    }
}

/// Descriptors of every shop table, `product_item` named by convention
pub fn descriptors() -> Vec<EntityDescriptor> {
    vec![
        product_item_descriptor(),
        category_descriptor(),
        order_descriptor(),
        order_line_descriptor(),
    ]
}
