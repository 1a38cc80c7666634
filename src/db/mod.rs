pub mod rating;
pub mod store;
