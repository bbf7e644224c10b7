mod component_category;
mod input_policy;

pub use component_category::ComponentCategory;
pub use input_policy::{InputPolicy, MIN_CONTENT_LENGTH};
