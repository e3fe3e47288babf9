pub mod index;
pub mod summary;
