pub mod rating;
pub mod store;

pub use rating::{delete_rating_handler, get_my_store_rating_handler, submit_rating_handler};
pub use store::get_store_handler;
