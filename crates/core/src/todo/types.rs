use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// The same shape is produced by every storage backend: `id` is always a
/// string (the relational engine stores it as a native UUID column and
/// coerces it on read), and `created_at` is kept as an opaque string in
/// whatever format the backend emitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}
