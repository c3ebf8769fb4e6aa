pub mod history;

pub use history::{validate_draw, DrawHistory};
