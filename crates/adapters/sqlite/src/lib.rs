//! catalog-adapter-sqlite - SQLite 适配器

mod connection;
mod schema;

pub use connection::*;
pub use schema::*;
