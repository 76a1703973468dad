//! Networked Postgres storage backend using `sqlx`.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
