pub mod post;

pub use post::create_contact;
