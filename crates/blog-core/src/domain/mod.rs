//! Domain entities and value objects.

mod limitation;
mod post;

pub use limitation::{DEFAULT_LIMIT, DEFAULT_OFFSET, Limitation, MAX_LIMIT};
pub use post::Post;
