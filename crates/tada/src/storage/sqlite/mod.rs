//! Embedded SQLite storage backend using `rusqlite` and `tokio-rusqlite`.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
