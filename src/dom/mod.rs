pub mod extract;

pub use extract::{all_attributes, any_match, first_attribute, first_text, key_value_rows};
