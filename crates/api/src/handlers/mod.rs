pub mod captions;
pub mod common;
pub mod health;

pub use captions::{post_caption, post_captions};
pub use common::ErrorResponse;
pub use health::health;
