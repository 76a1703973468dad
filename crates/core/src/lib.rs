pub mod storage;
pub mod todo;
