pub mod rating;
pub mod store;
pub mod user;

pub use rating::{Rating, SubmitOutcome, SubmittedRating};
pub use store::{Store, StoreAggregate};
pub use user::{Caller, Claims, Role};
