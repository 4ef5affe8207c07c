pub mod handlers;
pub mod routes;
pub mod upload;

pub use routes::create_http_routes;
