#![allow(dead_code)]

pub mod shop;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};
use tracing::info;

pub struct TestContext {
    pub name: String,
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new(name: &str) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();

        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        create_tables(&db).await.unwrap();
        info!("Test context `{}` ready", name);

        Self {
            name: name.to_owned(),
            db,
        }
    }
}

pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let stmts = [
        schema.create_table_from_entity(shop::category::Entity),
        schema.create_table_from_entity(shop::product_item::Entity),
        schema.create_table_from_entity(shop::order::Entity),
        schema.create_table_from_entity(shop::order_line::Entity),
    ];
    for stmt in stmts.iter() {
        db.execute(backend.build(stmt)).await?;
    }
    Ok(())
}
