//! Record extraction from parsed byte.co pages.

mod post;
pub mod selectors;
mod user;

pub use post::{extract_post, Post};
pub use user::{extract_user, User};
