pub mod car;
pub mod contact;
pub mod rating;
pub mod user;

pub use car::Car;
pub use rating::{CarRatingSummary, Rating};
pub use user::User;
