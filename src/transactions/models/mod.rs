pub mod summary;
pub mod transaction;
