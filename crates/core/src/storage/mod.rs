//! Storage abstraction for todos.
//!
//! Defines the repository trait implemented by the concrete storage
//! backends (SQLite and Postgres) in the `tada` binary crate, plus the
//! error type and HTTP status mapping shared by all of them.

mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::TodoRepository;
