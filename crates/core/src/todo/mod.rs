mod types;
mod validation;

pub use types::Todo;
pub use validation::{validate_title, ValidationError, MAX_TITLE_LEN};
