use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    http::handlers::{
        admin_check_handler, auth_check_handler, car_count_handler, check_model_handler,
        create_car_handler, create_contact_handler, delete_car_handler, delete_user_handler,
        get_all_cars_admin_handler, get_all_cars_handler, get_all_users_handler,
        get_car_handler, get_car_with_rating_handler, get_user_name_handler, login_handler,
        logout_handler, rate_car_handler, rating_analysis_handler, root_handler, signup_handler,
        update_car_handler, user_count_handler,
    },
    middleware::{create_auth_rate_limiter, rate_limit_middleware},
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    let auth_rate_limiter = create_auth_rate_limiter();
    let credential_routes = Router::new()
        .route("/signup", post(signup_handler))
        .route("/login", post(login_handler))
        .route_layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(auth_rate_limiter.clone(), req, next)
        }));

    let image_dir = state.config.image_dir.clone();

    Router::new()
        .route("/", get(root_handler))
        // accounts
        .route("/auth/check", get(auth_check_handler))
        .route("/admin/check", get(admin_check_handler))
        .route("/logout", get(logout_handler).post(logout_handler))
        .route("/users", get(get_all_users_handler))
        .route("/users/{id}", axum::routing::delete(delete_user_handler))
        .route("/user/{email}", get(get_user_name_handler))
        .route("/api/users/count", get(user_count_handler))
        // cars
        .route("/cardata", get(get_all_cars_handler).post(create_car_handler))
        .route(
            "/cardata/{id}",
            get(get_car_with_rating_handler).delete(delete_car_handler),
        )
        .route("/cardataadmin", get(get_all_cars_admin_handler))
        .route("/getcardata/{id}", get(get_car_handler))
        .route("/updatecar/{id}", put(update_car_handler))
        .route("/checkmodel/{model}", get(check_model_handler))
        .route("/api/cars/count", get(car_count_handler))
        // ratings
        .route("/rate", post(rate_car_handler))
        .route("/car-rating-analysis", get(rating_analysis_handler))
        .route("/contact", post(create_contact_handler))
        .merge(credential_routes)
        .nest_service("/images", ServeDir::new(image_dir))
        .with_state(state)
}
