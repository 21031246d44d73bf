use super::*;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set};

/// Rows inserted by [`seed`]
pub const SEEDED_ROWS: u64 = 8;

pub async fn seed<C>(db: &C) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    for name in ["Tea", "Coffee", "Cocoa"] {
        category::Entity::insert(category::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        })
        .exec(db)
        .await?;
    }

    for (name, price) in [("Earl Grey", 450), ("Sencha", 620)] {
        product_item::Entity::insert(product_item::ActiveModel {
            name: Set(name.to_owned()),
            price: Set(price),
            category_id: Set(1),
            ..Default::default()
        })
        .exec(db)
        .await?;
    }

    order::Entity::insert(order::ActiveModel {
        customer: Set("Bob".to_owned()),
        ..Default::default()
    })
    .exec(db)
    .await?;

    for (product_item_id, quantity) in [(1, 2), (2, 1)] {
        order_line::Entity::insert(order_line::ActiveModel {
            order_id: Set(1),
            product_item_id: Set(product_item_id),
            quantity: Set(quantity),
            ..Default::default()
        })
        .exec(db)
        .await?;
    }

    Ok(())
}

/// Number of rows in every shop table, in `descriptors()` order
pub async fn row_counts<C>(db: &C) -> Result<[u64; 4], DbErr>
where
    C: ConnectionTrait,
{
    Ok([
        product_item::Entity::find().count(db).await?,
        category::Entity::find().count(db).await?,
        order::Entity::find().count(db).await?,
        order_line::Entity::find().count(db).await?,
    ])
}
