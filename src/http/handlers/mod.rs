pub mod car;
pub mod contact;
pub mod rating;
pub mod user;

use serde::Serialize;

pub use car::{
    car_count_handler, check_model_handler, create_car_handler, delete_car_handler,
    get_all_cars_admin_handler, get_all_cars_handler, get_car_handler,
    get_car_with_rating_handler, update_car_handler,
};
pub use contact::create_contact_handler;
pub use rating::{rate_car_handler, rating_analysis_handler};
pub use user::{
    admin_check_handler, auth_check_handler, delete_user_handler, get_all_users_handler,
    get_user_name_handler, login_handler, logout_handler, signup_handler, user_count_handler,
};

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

pub async fn root_handler() -> &'static str {
    "Hello World!"
}
